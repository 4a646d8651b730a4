//! WhatsApp-style TXT export parser.
//!
//! Converts the raw export text into an ordered [`Message`] sequence with
//! precomputed calendar fields. The parse is best-effort: lines that do not
//! start a new entry fold into the previous entry's body, entries with
//! unparseable timestamps are dropped, and an empty or non-matching input
//! yields an empty sequence rather than an error.
//!
//! Expected entry shape:
//!
//! ```text
//! 12/08/23, 9:00 pm - Alice: Hello there
//! 12/08/23, 9:05 pm - Bob joined using this group's invite link
//! ```
//!
//! The second line has no `sender: body` split and becomes a
//! [`GROUP_NOTIFICATION`](crate::GROUP_NOTIFICATION) entry.
//!
//! # Example
//!
//! ```rust
//! use chatlens::ChatParser;
//!
//! let parser = ChatParser::new();
//! let messages = parser.parse_str("12/08/23, 9:00 pm - Alice: Hello there");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].user, "Alice");
//! assert_eq!(messages[0].hour, 21);
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::Message;
use crate::config::{DateOrder, ParseConfig};
use crate::error::Result;

/// Pattern for lines that start a new entry: numeric date, time with
/// optional seconds and AM/PM, then the ` - ` separator before the rest.
const TIMESTAMP_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap][Mm])?)\s-\s(.*)";

/// Parser for WhatsApp-style text chat exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::ChatParser;
///
/// let parser = ChatParser::new();
/// let messages = parser.parse_file("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatLensError>(())
/// ```
pub struct ChatParser {
    config: ParseConfig,
    pattern: Regex,
}

impl ChatParser {
    /// Creates a new parser with default configuration (day-first dates).
    pub fn new() -> Self {
        Self::with_config(ParseConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            // Static pattern, valid by construction.
            pattern: Regex::new(TIMESTAMP_PATTERN).unwrap(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses an export already decoded to text. Never fails: malformed
    /// lines are skipped and an empty input yields an empty vector.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut dropped = 0usize;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(caps) = self.pattern.captures(line) {
                // New entry starts
                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let rest = caps.get(3).map_or("", |m| m.as_str());

                let Some(timestamp) = parse_timestamp(date_str, time_str, self.config.date_order)
                else {
                    // Matched the shape but not a real date under the
                    // configured convention. Drop the entry, keep going.
                    dropped += 1;
                    continue;
                };

                let msg = match rest.split_once(": ") {
                    Some((sender, body)) => Message::new(timestamp, sender.trim(), body),
                    // No sender label: a system event (join/leave/change).
                    None => Message::notification(timestamp, rest),
                };

                messages.push(msg);
            } else if let Some(last) = messages.last_mut() {
                // Continuation of the previous entry (multiline message)
                last.append_line(line);
            } else {
                // Orphan line before the first entry
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(dropped, "skipped lines without a parseable entry");
        }
        debug!(messages = messages.len(), "parsed chat export");

        messages
    }

    /// Parses an export supplied as a UTF-8 byte blob.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Vec<Message>> {
        let content = String::from_utf8(data.to_vec())?;
        Ok(self.parse_str(&content))
    }

    /// Reads and parses an export file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns chrono format strings for the configured order and year width.
///
/// 12-hour variants come first so `9:00 PM` does not get misread by `%H`;
/// a bare `21:00` falls through to the 24-hour forms.
fn date_parse_formats(order: DateOrder, two_digit_year: bool) -> &'static [&'static str] {
    match (order, two_digit_year) {
        (DateOrder::DayFirst, true) => &[
            "%d/%m/%y, %I:%M:%S %p",
            "%d/%m/%y, %I:%M %p",
            "%d/%m/%y, %H:%M:%S",
            "%d/%m/%y, %H:%M",
        ],
        (DateOrder::DayFirst, false) => &[
            "%d/%m/%Y, %I:%M:%S %p",
            "%d/%m/%Y, %I:%M %p",
            "%d/%m/%Y, %H:%M:%S",
            "%d/%m/%Y, %H:%M",
        ],
        (DateOrder::MonthFirst, true) => &[
            "%m/%d/%y, %I:%M:%S %p",
            "%m/%d/%y, %I:%M %p",
            "%m/%d/%y, %H:%M:%S",
            "%m/%d/%y, %H:%M",
        ],
        (DateOrder::MonthFirst, false) => &[
            "%m/%d/%Y, %I:%M:%S %p",
            "%m/%d/%Y, %I:%M %p",
            "%m/%d/%Y, %H:%M:%S",
            "%m/%d/%Y, %H:%M",
        ],
    }
}

/// Parses a timestamp from the captured date and time strings under the
/// configured day/month order. Returns `None` when no format applies.
fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<NaiveDateTime> {
    // "23" must parse with %y, not as literal year 23 under %Y.
    let two_digit_year = date_str.rsplit('/').next().is_some_and(|y| y.len() <= 2);

    // Uppercase so "pm" satisfies %p.
    let datetime_str = format!("{date_str}, {time_str}").to_uppercase();

    for parse_format in date_parse_formats(order, two_digit_year) {
        if let Ok(ts) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
            return Some(ts);
        }
    }

    None
}
