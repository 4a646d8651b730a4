//! Configuration types for the parser and the analyzer.
//!
//! Two concerns are configured explicitly instead of living in process-wide
//! state:
//!
//! - [`ParseConfig`] — how timestamps are read. The day/month order is a
//!   fixed convention chosen up front, never inferred per line.
//! - [`AnalyzerConfig`] — the stop-word list and emoji membership set used
//!   by the frequency statistics.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalyzerConfig, DateOrder, ParseConfig};
//!
//! let parse = ParseConfig::new().with_date_order(DateOrder::MonthFirst);
//!
//! let analyze = AnalyzerConfig::new()
//!     .with_stop_words_text("the\nand\nok");
//! assert!(analyze.is_stop_word("ok"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default stop-word resource, one token per line.
///
/// Mirrors the word lists chat analyzers ship for mixed English/Hinglish
/// group chats. Override with [`AnalyzerConfig::with_stop_words_text`].
pub const DEFAULT_STOP_WORDS: &str = include_str!("../assets/stop_words.txt");

/// Day/month order convention for ambiguous numeric dates.
///
/// A line like `12/08/23` is the 12th of August under [`DayFirst`] and
/// December 8th under [`MonthFirst`]. The whole export is parsed under one
/// convention.
///
/// [`DayFirst`]: DateOrder::DayFirst
/// [`MonthFirst`]: DateOrder::MonthFirst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// DD/MM/YY(YY) — the default, matching most WhatsApp locales.
    #[default]
    DayFirst,
    /// MM/DD/YY(YY) — US-style exports.
    MonthFirst,
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DateOrder, ParseConfig};
///
/// let config = ParseConfig::new().with_date_order(DateOrder::DayFirst);
/// assert_eq!(config.date_order, DateOrder::DayFirst);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Day/month order used for every timestamp (default: day first).
    pub date_order: DateOrder,
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order convention.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the statistics analyzer.
///
/// Holds the stop-word set used by word frequencies and an optional
/// explicit emoji membership set. When no emoji set is configured, the
/// Unicode emoji table from the `emojis` crate is the membership oracle.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Lowercased tokens excluded from word-frequency tables.
    pub stop_words: HashSet<String>,

    /// Explicit emoji membership set; `None` means "any Unicode emoji".
    pub emoji_set: Option<HashSet<char>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stop_words: parse_stop_words(DEFAULT_STOP_WORDS),
            emoji_set: None,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with the bundled stop-word list and the
    /// default emoji membership.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stop-word set from a newline-delimited token list.
    ///
    /// Tokens are lowercased; blank lines are ignored.
    #[must_use]
    pub fn with_stop_words_text(mut self, text: &str) -> Self {
        self.stop_words = parse_stop_words(text);
        self
    }

    /// Replaces the stop-word set with an explicit collection.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .collect();
        self
    }

    /// Sets an explicit emoji membership set.
    #[must_use]
    pub fn with_emoji_set(mut self, emoji: HashSet<char>) -> Self {
        self.emoji_set = Some(emoji);
        self
    }

    /// Returns `true` if the (already lowercased) token is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Returns `true` if the character counts as an emoji under the
    /// configured membership.
    pub fn is_emoji(&self, c: char) -> bool {
        match &self.emoji_set {
            Some(set) => set.contains(&c),
            None => {
                let mut buf = [0u8; 4];
                emojis::get(c.encode_utf8(&mut buf)).is_some()
            }
        }
    }
}

/// Splits a newline-delimited stop-word resource into a lowercased set.
fn parse_stop_words(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
