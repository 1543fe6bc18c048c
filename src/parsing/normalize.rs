//! Line normalization for raw export text.

/// Marker each newline is expanded into before splitting.
///
/// The padding spaces end up on both neighbouring lines; later stages trim
/// the fields they extract, and the message filter relies on the leading
/// space when it looks at a line's second character.
const LINE_MARKER: &str = " \n ";

/// Stray control character some exports carry (C1 "start of guarded area").
const STRAY_CONTROL: char = '\u{0096}';

/// Splits raw export text into logical lines.
///
/// Newlines become `" \n "` boundaries, carriage returns and the stray
/// U+0096 control character are removed, then the text is split on the
/// boundaries. The result always holds `newline count + 1` lines, so empty
/// input yields a single empty line.
///
/// # Example
///
/// ```
/// use chatplot::parsing::normalize_lines;
///
/// let lines = normalize_lines("a\r\nb");
/// assert_eq!(lines, vec!["a ", " b"]);
/// ```
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.replace('\n', LINE_MARKER)
        .replace(['\r', STRAY_CONTROL], "")
        .split('\n')
        .map(str::to_owned)
        .collect()
}
