//! Word-volume share per sender.

use serde::{Deserialize, Serialize};

use super::words::{PunctuationPolicy, count_words};
use crate::chat::ChatLog;
use crate::error::Result;
use crate::participants::Participant;

/// One pie slice: a sender and the number of words they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub sender: String,
    pub words: usize,
}

/// Builds one slice per real sender, in index order.
///
/// The aggregate participant is left out. A slice's weight is the total token
/// count of the sender's text blob under `policy`.
pub fn pie_chart(chat: &ChatLog, policy: PunctuationPolicy) -> Result<Vec<PieSlice>> {
    chat.users()
        .senders()
        .into_iter()
        .map(|sender| {
            let blob = chat.text_blob(&Participant::sender(sender))?;
            Ok(PieSlice {
                sender: sender.to_string(),
                words: count_words(blob, policy).total(),
            })
        })
        .collect()
}

/// Percentage share of each slice, summing to 100 unless every slice is empty.
pub fn pie_shares(slices: &[PieSlice]) -> Vec<f64> {
    let total: usize = slices.iter().map(|s| s.words).sum();
    slices
        .iter()
        .map(|s| {
            if total == 0 {
                0.0
            } else {
                s.words as f64 / total as f64 * 100.0
            }
        })
        .collect()
}
