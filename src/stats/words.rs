//! Word frequency counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Punctuation considered for removal before counting.
pub const PUNCTUATION: [&str; 6] = [".", ", ", ":", ";", "'", "\""];

/// How [`count_words`] treats [`PUNCTUATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationPolicy {
    /// Each mark is removed from the *original* text and only the last
    /// result is kept, so only `"` is actually stripped. Matches the
    /// word totals of existing reports.
    #[default]
    LastOnly,
    /// Remove every listed mark.
    StripAll,
}

impl PunctuationPolicy {
    /// Applies the policy to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            PunctuationPolicy::LastOnly => {
                let mut stripped = text.to_string();
                for mark in PUNCTUATION {
                    stripped = text.replace(mark, "");
                }
                stripped
            }
            PunctuationPolicy::StripAll => PUNCTUATION
                .iter()
                .fold(text.to_string(), |acc, mark| acc.replace(mark, "")),
        }
    }
}

/// Token frequencies, in first-seen token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordCounts {
    fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.order.push(token.to_string());
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Occurrences of `token`, zero if absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(|token| (token.as_str(), self.counts[token]))
    }
}

/// Counts space-separated tokens after applying `policy`.
///
/// The text is split on single spaces, so consecutive spaces produce empty
/// tokens that are counted like any other. An empty text holds one empty
/// token.
///
/// # Example
///
/// ```
/// use chatplot::stats::{count_words, PunctuationPolicy};
///
/// let counts = count_words("hi  \"hi\"", PunctuationPolicy::LastOnly);
/// assert_eq!(counts.get("hi"), 2);
/// assert_eq!(counts.get(""), 1);
/// ```
pub fn count_words(text: &str, policy: PunctuationPolicy) -> WordCounts {
    let mut counts = WordCounts::default();
    for token in policy.apply(text).split(' ') {
        counts.add(token);
    }
    counts
}

/// Returns the number of distinct tokens and their frequencies.
pub fn word_stats(counts: &WordCounts) -> (usize, Vec<usize>) {
    (counts.distinct(), counts.iter().map(|(_, n)| n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_only_keeps_other_marks() {
        let stripped = PunctuationPolicy::LastOnly.apply("a. b, c: d; e' \"f\"");
        assert_eq!(stripped, "a. b, c: d; e' f");
    }

    #[test]
    fn test_strip_all() {
        let stripped = PunctuationPolicy::StripAll.apply("a. b, c: d; e' \"f\"");
        assert_eq!(stripped, "a bc d e f");
    }

    #[test]
    fn test_counts_keep_first_seen_order() {
        let counts = count_words("b a b c a b", PunctuationPolicy::LastOnly);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_empty_text_counts_one_token() {
        let counts = count_words("", PunctuationPolicy::LastOnly);
        assert_eq!(counts.distinct(), 1);
        assert_eq!(counts.get(""), 1);
    }

    #[test]
    fn test_double_spaces_make_empty_tokens() {
        let counts = count_words("a  b", PunctuationPolicy::LastOnly);
        assert_eq!(counts.get(""), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_policy_changes_distinct_tokens() {
        let text = "hello. hello";
        assert_eq!(count_words(text, PunctuationPolicy::LastOnly).distinct(), 2);
        assert_eq!(count_words(text, PunctuationPolicy::StripAll).distinct(), 1);
    }

    #[test]
    fn test_word_stats() {
        let counts = count_words("x y x", PunctuationPolicy::LastOnly);
        let (unique, freqs) = word_stats(&counts);
        assert_eq!(unique, 2);
        assert_eq!(freqs, vec![2, 1]);
    }
}
