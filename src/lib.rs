//! # Chatlens
//!
//! A Rust library for parsing WhatsApp-style chat exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! Chatlens has two components with a one-way data flow:
//!
//! - [`ChatParser`] — converts the raw, loosely structured export text
//!   into an ordered sequence of typed [`Message`] records with
//!   precomputed calendar fields. This is the hard part: ambiguous date
//!   formats, multi-line messages, and system notifications all get
//!   normalized here.
//! - [`Analyzer`] — pure functions over `(scope, messages)` producing
//!   count tables, timelines, activity heatmaps, and word/emoji frequency
//!   tables. A [`Scope`] is either `Overall` or a single user.
//!
//! The parse is best-effort: malformed lines are dropped (counted at debug
//! level via `tracing`), and every aggregation is total over any input,
//! including an empty one.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::{Analyzer, ChatParser, Scope};
//!
//! let export = "12/08/23, 9:00 pm - Alice: Hello there\n\
//!               12/08/23, 9:05 pm - Bob: Hi Alice!";
//!
//! let messages = ChatParser::new().parse_str(export);
//! let analyzer = Analyzer::new();
//!
//! let stats = analyzer.fetch_stats(&Scope::Overall, &messages);
//! assert_eq!(stats.messages, 2);
//!
//! let timeline = analyzer.monthly_timeline(&Scope::Overall, &messages);
//! assert_eq!(timeline[0].label, "August-2023");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`], raw text to [`Message`] sequence
//! - [`message`] — the [`Message`] record and its sentinels
//! - [`stats`] — [`Analyzer`], [`Scope`], and all result tables
//! - [`config`] — [`ParseConfig`](config::ParseConfig) and
//!   [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`error`] — [`ChatLensError`], [`Result`]
//! - [`cli`] — clap argument surface (feature `cli`)
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod parser;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatLensError, Result};
pub use message::{GROUP_NOTIFICATION, MEDIA_OMITTED, Message};
pub use parser::ChatParser;
pub use stats::{Analyzer, OVERALL, Scope};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type and sentinels
    pub use crate::message::{GROUP_NOTIFICATION, MEDIA_OMITTED, Message};

    // Error types
    pub use crate::error::{ChatLensError, Result};

    // Parsing
    pub use crate::config::{DateOrder, ParseConfig};
    pub use crate::parser::ChatParser;

    // Statistics
    pub use crate::config::AnalyzerConfig;
    pub use crate::stats::{
        Analyzer, BusyUsers, ChatStats, DailyPoint, DayCount, EmojiCount, Heatmap, HeatmapRow,
        MonthCount, MonthlyPoint, OVERALL, Scope, TokenCount, UserCount, UserShare, WordFrequency,
        user_list,
    };
}
