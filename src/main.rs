//! # chatlens CLI
//!
//! Command-line front end for the chatlens library: parses one export and
//! prints the full statistics report, or a JSON document with `--json`.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::cli::Args;
use chatlens::config::{AnalyzerConfig, ParseConfig};
use chatlens::stats::user_list;
use chatlens::{Analyzer, ChatLensError, ChatParser, Message, Scope};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatLensError> {
    let args = <Args as ClapParser>::parse();

    let parser =
        ChatParser::with_config(ParseConfig::new().with_date_order(args.date_order.into()));
    let messages = parser.parse_file(Path::new(&args.input))?;

    let mut config = AnalyzerConfig::new();
    if let Some(ref path) = args.stop_words {
        let text = fs::read_to_string(path)?;
        config = config.with_stop_words_text(&text);
    }
    let analyzer = Analyzer::with_config(config);
    let scope = Scope::from_name(&args.user);

    if args.json {
        print_json(&analyzer, &scope, &messages)?;
    } else {
        print_report(&args, &analyzer, &scope, &messages);
    }

    Ok(())
}

/// Emits every result table as one JSON document on stdout.
fn print_json(
    analyzer: &Analyzer,
    scope: &Scope,
    messages: &[Message],
) -> Result<(), ChatLensError> {
    let busy_users = scope
        .is_overall()
        .then(|| analyzer.most_busy_users(messages));

    let report = serde_json::json!({
        "users": user_list(messages),
        "stats": analyzer.fetch_stats(scope, messages),
        "busy_users": busy_users,
        "word_frequency": analyzer.word_frequency(scope, messages),
        "emoji_frequency": analyzer.emoji_frequency(scope, messages),
        "monthly_timeline": analyzer.monthly_timeline(scope, messages),
        "daily_timeline": analyzer.daily_timeline(scope, messages),
        "week_activity": analyzer.week_activity(scope, messages),
        "month_activity": analyzer.month_activity(scope, messages),
        "heatmap": analyzer.activity_heatmap(scope, messages),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Prints the sectioned console report.
fn print_report(args: &Args, analyzer: &Analyzer, scope: &Scope, messages: &[Message]) {
    println!("📊 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input: {}", args.input);
    println!("👤 Scope: {}", args.user);
    println!();

    let stats = analyzer.fetch_stats(scope, messages);
    println!("Top Statistics");
    println!("   Total Messages: {}", stats.messages);
    println!("   Total Words:    {}", stats.words);
    println!("   Media Shared:   {}", stats.media);
    println!("   Links Shared:   {}", stats.links);

    if scope.is_overall() {
        let busy = analyzer.most_busy_users(messages);
        if !busy.top.is_empty() {
            println!();
            println!("Most Busy Users");
            for share in &busy.shares {
                println!("   {:<24} {:>6.2}%", share.user, share.percent);
            }
        }
    }

    let timeline = analyzer.monthly_timeline(scope, messages);
    if !timeline.is_empty() {
        println!();
        println!("Monthly Timeline");
        for point in &timeline {
            println!("   {:<16} {:>6}", point.label, point.messages);
        }
    }

    let daily = analyzer.daily_timeline(scope, messages);
    if !daily.is_empty() {
        println!();
        println!(
            "Daily Timeline ({} active days, {} → {})",
            daily.len(),
            daily[0].date,
            daily[daily.len() - 1].date
        );
    }

    let week = analyzer.week_activity(scope, messages);
    if !week.is_empty() {
        println!();
        println!("Most Busy Days");
        for day in &week {
            println!("   {:<12} {:>6}", day.day_name, day.messages);
        }
    }

    let months = analyzer.month_activity(scope, messages);
    if !months.is_empty() {
        println!();
        println!("Most Busy Months");
        for month in &months {
            println!("   {:<12} {:>6}", month.month, month.messages);
        }
    }

    let heatmap = analyzer.activity_heatmap(scope, messages);
    if !heatmap.periods.is_empty() {
        println!();
        println!("Weekly Activity Heatmap");
        print!("   {:<12}", "");
        for period in &heatmap.periods {
            print!("{:>7}", period);
        }
        println!();
        for row in &heatmap.rows {
            print!("   {:<12}", row.day_name);
            for cell in &row.cells {
                print!("{:>7}", cell);
            }
            println!();
        }
    }

    let words = analyzer.word_frequency(scope, messages);
    if !words.top.is_empty() {
        println!();
        println!("Most Common Words");
        for token in &words.top {
            println!("   {:<24} {:>6}", token.token, token.count);
        }
    }

    let emoji = analyzer.emoji_frequency(scope, messages);
    if !emoji.is_empty() {
        println!();
        println!("Emojis");
        for entry in &emoji {
            println!("   {:<4} {:>6}", entry.emoji, entry.count);
        }
    }
}
