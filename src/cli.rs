//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure for the `chatlens`
//! binary, and [`DateOrderArg`], the CLI-facing date-order selector that
//! converts into [`config::DateOrder`](crate::config::DateOrder).

use clap::{Parser, ValueEnum};

use crate::config::DateOrder;

/// Analyze a WhatsApp chat export: message counts, timelines,
/// activity heatmaps, word and emoji frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --date-order mdy
    chatlens chat.txt --stop-words my_words.txt --json")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Scope the analysis to one user ("Overall" = everyone)
    #[arg(short, long, default_value = "Overall", value_name = "USER")]
    pub user: String,

    /// Day/month order convention for ambiguous dates
    #[arg(long, value_enum, default_value = "dmy")]
    pub date_order: DateOrderArg,

    /// Newline-delimited stop-word file replacing the bundled list
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,

    /// Emit all result tables as a single JSON document
    #[arg(long)]
    pub json: bool,
}

/// Date order convention as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateOrderArg {
    /// Day/month/year (most WhatsApp locales)
    Dmy,
    /// Month/day/year (US-style exports)
    Mdy,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> Self {
        match arg {
            DateOrderArg::Dmy => DateOrder::DayFirst,
            DateOrderArg::Mdy => DateOrder::MonthFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["chatlens", "chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.user, "Overall");
        assert_eq!(args.date_order, DateOrderArg::Dmy);
        assert!(args.stop_words.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_args_full() {
        let args = Args::parse_from([
            "chatlens",
            "chat.txt",
            "--user",
            "Alice",
            "--date-order",
            "mdy",
            "--json",
        ]);
        assert_eq!(args.user, "Alice");
        assert_eq!(args.date_order, DateOrderArg::Mdy);
        assert!(args.json);
    }

    #[test]
    fn test_date_order_conversion() {
        assert_eq!(DateOrder::from(DateOrderArg::Dmy), DateOrder::DayFirst);
        assert_eq!(DateOrder::from(DateOrderArg::Mdy), DateOrder::MonthFirst);
    }

    #[test]
    fn test_args_debug_assert() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
