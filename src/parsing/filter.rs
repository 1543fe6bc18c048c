//! Rejection of system and meta lines.

/// Returns `true` if a logical line looks like a user message.
///
/// A line qualifies when splitting it on `:` yields exactly three segments
/// (time, sender, content) and its second character is neither `[` nor `+`,
/// the prefixes system notices and phone-number senders use in exports.
///
/// Content containing its own colons fails the segment count and is dropped
/// along with the system lines.
///
/// # Example
///
/// ```
/// use chatplot::parsing::is_user_message;
///
/// assert!(is_user_message("01/02/23, 10:00 - ~ John: hello"));
/// assert!(!is_user_message("01/02/23, 10:00 - ~ John: see you at 10:30"));
/// assert!(!is_user_message(" [01/02/23, 10:00] John: hi"));
/// ```
pub fn is_user_message(line: &str) -> bool {
    if line.split(':').count() != 3 {
        return false;
    }
    !matches!(line.chars().nth(1), Some('[' | '+'))
}
