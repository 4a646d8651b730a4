//! The normalized chat record type.
//!
//! This module provides [`Message`], one record per logical chat entry.
//! The parser converts raw export lines into this structure; every
//! aggregation downstream consumes it unchanged.
//!
//! # Derived fields
//!
//! All calendar fields are computed once in the constructor and never
//! recomputed. Aggregations group on them directly instead of re-deriving
//! from the timestamp.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 8, 12)
//!     .unwrap()
//!     .and_hms_opt(21, 0, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(msg.year, 2023);
//! assert_eq!(msg.month, "August");
//! assert_eq!(msg.day_name, "Saturday");
//! assert_eq!(msg.period, "21-22");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sentinel user value marking system/non-authored chat events
/// (joins, leaves, subject changes, encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Sentinel body WhatsApp substitutes for attachments in text exports.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// One logical chat entry with precomputed calendar fields.
///
/// Invariants upheld by the constructors:
/// - `timestamp` and `user` are always present; system events carry the
///   [`GROUP_NOTIFICATION`] sentinel, never an empty user.
/// - Derived fields always agree with `timestamp`.
/// - `message` is trimmed of leading/trailing whitespace; internal
///   whitespace and case are untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the entry was written, in the export's local time.
    pub timestamp: NaiveDateTime,

    /// Sender name, or [`GROUP_NOTIFICATION`] for system events.
    pub user: String,

    /// Trimmed text body. May contain newlines for multiline messages and
    /// may be the literal [`MEDIA_OMITTED`] placeholder.
    pub message: String,

    /// Calendar year.
    pub year: i32,

    /// English month name, e.g. `"August"`.
    pub month: String,

    /// Month number, 1-12.
    pub month_num: u32,

    /// Day of month.
    pub day: u32,

    /// English weekday name, e.g. `"Saturday"`.
    pub day_name: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute of hour.
    pub minute: u32,

    /// Date without time, for daily grouping.
    pub only_date: NaiveDate,

    /// Hour bucket label used as the heatmap column key.
    ///
    /// `"<hour>-<hour+1>"`, except at the day boundary: hour 23 wraps to
    /// `"23-0"` and hour 0 is `"0-1"`.
    pub period: String,
}

impl Message {
    /// Creates a user-authored message and computes all derived fields.
    ///
    /// The body is trimmed here so callers can pass raw capture text.
    pub fn new(timestamp: NaiveDateTime, user: impl Into<String>, message: &str) -> Self {
        let date = timestamp.date();
        Self {
            timestamp,
            user: user.into(),
            message: message.trim().to_string(),
            year: date.year(),
            month: date.format("%B").to_string(),
            month_num: date.month(),
            day: date.day(),
            day_name: date.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            only_date: date,
            period: period_label(timestamp.hour()),
        }
    }

    /// Creates a system-notification entry with the sentinel user.
    ///
    /// # Example
    ///
    /// ```
    /// use chatlens::{Message, GROUP_NOTIFICATION};
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 8, 12)
    ///     .unwrap()
    ///     .and_hms_opt(21, 5, 0)
    ///     .unwrap();
    /// let msg = Message::notification(ts, "Bob joined using this group's invite link");
    /// assert_eq!(msg.user, GROUP_NOTIFICATION);
    /// ```
    pub fn notification(timestamp: NaiveDateTime, message: &str) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, message)
    }

    /// Appends a continuation line to the body with a newline joiner,
    /// keeping the trailing-whitespace trim invariant.
    pub fn append_line(&mut self, line: &str) {
        self.message.push('\n');
        self.message.push_str(line);
        let trimmed = self.message.trim_end().len();
        self.message.truncate(trimmed);
    }

    /// Returns `true` if this entry is a system event rather than a
    /// user-authored message.
    pub fn is_notification(&self) -> bool {
        self.user == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_OMITTED
    }
}

/// Builds the hour bucket label for a given hour of day.
///
/// Boundary handling must match the heatmap columns exactly: the last hour
/// of the day wraps to next-day hour 0.
fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-0".to_string(),
        0 => "0-1".to_string(),
        h => format!("{h}-{}", h + 1),
    }
}
