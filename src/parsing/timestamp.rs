//! Timestamp validation.

use chrono::NaiveDateTime;

/// The export's timestamp layout, `DD/MM/YY, HH:MM`.
///
/// This is the one bit-exact contract with the export format.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Parses a raw timestamp segment.
///
/// Returns `None` on any mismatch or out-of-range value; callers drop the
/// record rather than report the failure.
///
/// # Example
///
/// ```
/// use chatplot::parsing::parse_timestamp;
///
/// assert!(parse_timestamp("01/02/23, 10:00").is_some());
/// assert!(parse_timestamp("32/13/99, 99:99").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}
