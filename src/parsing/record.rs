//! Splitting filtered lines into raw records.

use serde::{Deserialize, Serialize};

/// Default number of characters preceding the sender name in the second
/// `:`-segment (`"MM - "` in `DD/MM/YY, HH:MM - Sender: text`).
pub const DEFAULT_PREFIX_WIDTH: usize = 5;

/// Marker exports put in front of senders that aren't saved contacts.
const NON_CONTACT_MARKER: char = '~';

/// A raw, not yet validated message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sender: String,
    pub timestamp_raw: String,
    pub content: String,
}

/// Builds a [`Record`] from a filtered line.
///
/// - `timestamp_raw` is everything before the first `-`, space-trimmed.
/// - `sender` is the second `:`-segment minus its first `prefix_width`
///   characters, with whitespace and the `~` non-contact marker trimmed.
/// - `content` is the third `:`-segment, space-trimmed.
///
/// Returns `None` for lines with fewer than three `:`-segments. Lines of
/// any other shape produce a record with meaningless fields; timestamp
/// validation is what rejects them.
///
/// # Example
///
/// ```
/// use chatplot::parsing::{build_record, DEFAULT_PREFIX_WIDTH};
///
/// let record = build_record("01/02/23, 10:00 - John: hello", DEFAULT_PREFIX_WIDTH).unwrap();
/// assert_eq!(record.timestamp_raw, "01/02/23, 10:00");
/// assert_eq!(record.sender, "John");
/// assert_eq!(record.content, "hello");
/// ```
pub fn build_record(line: &str, prefix_width: usize) -> Option<Record> {
    let mut segments = line.split(':');
    let (_, name, content) = (segments.next()?, segments.next()?, segments.next()?);

    let timestamp_raw = line.split('-').next().unwrap_or_default();

    Some(Record {
        sender: strip_sender_prefix(name, prefix_width),
        timestamp_raw: timestamp_raw.trim_matches(' ').to_string(),
        content: content.trim_matches(' ').to_string(),
    })
}

fn strip_sender_prefix(segment: &str, prefix_width: usize) -> String {
    let name: String = segment.chars().skip(prefix_width).collect();
    name.trim()
        .trim_start_matches(NON_CONTACT_MARKER)
        .trim()
        .to_string()
}
