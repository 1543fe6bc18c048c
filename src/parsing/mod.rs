//! Chat export parsing pipeline.
//!
//! Raw text flows through four stages, each usable on its own:
//!
//! 1. [`normalize_lines`] - text into logical lines
//! 2. [`is_user_message`] - drop system and meta lines
//! 3. [`build_record`] - split a line into sender, raw timestamp and content
//! 4. [`parse_timestamp`] - keep only records whose timestamp parses
//!
//! [`parse_messages`] chains them and reports how many lines each stage
//! discarded.

mod filter;
mod normalize;
mod record;
mod timestamp;

use log::{debug, trace};

use crate::Message;

pub use filter::is_user_message;
pub use normalize::normalize_lines;
pub use record::{DEFAULT_PREFIX_WIDTH, Record, build_record};
pub use timestamp::{TIMESTAMP_FORMAT, parse_timestamp};

/// Line counts from one run of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Logical lines produced by the normalizer.
    pub lines: usize,
    /// Lines that passed the message filter.
    pub candidates: usize,
    /// Candidates dropped because their timestamp didn't parse.
    pub invalid_timestamps: usize,
    /// Messages kept in the validated table.
    pub messages: usize,
}

impl ParseReport {
    /// Lines rejected by the message filter.
    pub fn filtered_out(&self) -> usize {
        self.lines - self.candidates
    }
}

/// Runs the full pipeline over decoded export text.
///
/// Malformed lines are dropped silently; the returned [`ParseReport`] is the
/// only trace of them.
///
/// # Example
///
/// ```
/// use chatplot::parsing::{parse_messages, DEFAULT_PREFIX_WIDTH};
///
/// let text = "01/02/23, 10:00 - John: hello\n32/13/99, 99:99 - John: lost\n";
/// let (messages, report) = parse_messages(text, DEFAULT_PREFIX_WIDTH);
/// assert_eq!(messages.len(), 1);
/// assert_eq!(report.invalid_timestamps, 1);
/// ```
pub fn parse_messages(text: &str, prefix_width: usize) -> (Vec<Message>, ParseReport) {
    let lines = normalize_lines(text);
    let mut report = ParseReport {
        lines: lines.len(),
        ..ParseReport::default()
    };

    let mut messages = Vec::new();
    for line in lines.iter().filter(|line| is_user_message(line)) {
        report.candidates += 1;

        let Some(record) = build_record(line, prefix_width) else {
            continue;
        };

        match parse_timestamp(&record.timestamp_raw) {
            Some(timestamp) => {
                messages.push(Message::new(record.sender, timestamp, record.content));
            }
            None => {
                trace!("dropping line with timestamp {:?}", record.timestamp_raw);
                report.invalid_timestamps += 1;
            }
        }
    }
    report.messages = messages.len();

    debug!(
        "parsed {} messages from {} lines ({} filtered, {} bad timestamps)",
        report.messages,
        report.lines,
        report.filtered_out(),
        report.invalid_timestamps
    );

    (messages, report)
}
