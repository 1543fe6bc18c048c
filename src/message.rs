//! Validated chat message.
//!
//! A [`Message`] is one row of the validated table built by
//! [`ChatLog::parse`](crate::ChatLog::parse): a sender, a timestamp that
//! parsed under the export's `DD/MM/YY, HH:MM` contract, and the text content.
//!
//! # Example
//!
//! ```
//! use chatplot::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let msg = Message::new("John", ts, "hello");
//! assert_eq!(msg.sender(), "John");
//! assert_eq!(msg.hour(), 10);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One successfully parsed chat message.
///
/// Exports carry no timezone, so the timestamp is a [`NaiveDateTime`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author, with the export's prefix removed.
    pub sender: String,

    /// When the message was sent, minute precision.
    pub timestamp: NaiveDateTime,

    /// Text content, trimmed of surrounding spaces.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        sender: impl Into<String>,
        timestamp: NaiveDateTime,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            timestamp,
            content: content.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    // =========================================================================
    // Calendar fields used by time buckets
    // =========================================================================

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of month, `1..=31`.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Four-digit year.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
