//! Typed result tables produced by the [`Analyzer`](crate::Analyzer).
//!
//! These are immutable views derived from a [`Message`](crate::Message)
//! sequence; building them never mutates the source. All rows carry plain
//! owned data and serialize cleanly for presentation layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counters for a scope: message, word, media, and link totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of messages in scope.
    pub messages: usize,
    /// Whitespace-delimited tokens across all in-scope bodies.
    pub words: usize,
    /// Bodies that are exactly the media placeholder.
    pub media: usize,
    /// URL-shaped substrings across all in-scope bodies.
    pub links: usize,
}

/// One user with a message count, used for the busiest-users ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub user: String,
    pub messages: usize,
}

/// One user's share of total messages, as a percentage rounded to two
/// decimal places. Shares sum toward 100.00 but rounding may leave a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub user: String,
    pub percent: f64,
}

/// Busiest-users result: the top five plus the full ranked share table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Top five users by message count, descending; ties keep export order.
    pub top: Vec<UserCount>,
    /// Every user's share of total messages, same ordering.
    pub shares: Vec<UserShare>,
}

/// One token with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Word-frequency result: the ranked top tokens plus the raw corpus for
/// word-cloud rendering by an external collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Top tokens by frequency, descending; ties keep first occurrence.
    pub top: Vec<TokenCount>,
    /// All in-scope message text joined with single spaces.
    pub corpus: String,
}

/// One emoji with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// One calendar month present in the data, with its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// English month name.
    pub month: String,
    /// Display label, `"<month>-<year>"`, e.g. `"August-2023"`.
    pub label: String,
    pub messages: usize,
}

/// One calendar date present in the data, with its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message count for one weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day_name: String,
    pub messages: usize,
}

/// Message count for one month name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub messages: usize,
}

/// Day-of-week × period activity matrix.
///
/// Always exactly seven rows, Monday through Sunday; one column per
/// distinct period observed in scope, ordered by starting hour. Missing
/// day/period combinations hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Column labels (period buckets), ascending by starting hour.
    pub periods: Vec<String>,
    /// Seven rows, Monday first.
    pub rows: Vec<HeatmapRow>,
}

/// One weekday row of the heatmap; `cells` aligns with `Heatmap::periods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub day_name: String,
    pub cells: Vec<usize>,
}

impl Heatmap {
    /// Looks up the count for a day/period pair, `None` when either label
    /// is absent from the matrix.
    pub fn cell(&self, day_name: &str, period: &str) -> Option<usize> {
        let col = self.periods.iter().position(|p| p == period)?;
        let row = self.rows.iter().find(|r| r.day_name == day_name)?;
        row.cells.get(col).copied()
    }
}
