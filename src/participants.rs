//! Participants of a chat and the "all senders" aggregate.
//!
//! [`UserIndex`] lists every distinct sender in first-seen order followed by
//! [`Participant::Total`]. The aggregate is its own enum variant rather than a
//! reserved name, so a sender who happens to be called "Total" stays a
//! separate participant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Message;

/// Display label of the aggregate participant.
pub const TOTAL_LABEL: &str = "Total";

/// A chart subject: one sender, or everyone combined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    /// A single sender, by display name.
    Sender(String),
    /// All senders combined.
    Total,
}

impl Participant {
    /// Creates a sender participant.
    pub fn sender(name: impl Into<String>) -> Self {
        Participant::Sender(name.into())
    }

    /// Returns `true` for the aggregate.
    pub fn is_total(&self) -> bool {
        matches!(self, Participant::Total)
    }

    /// Returns `true` if `message` belongs to this participant.
    pub fn matches(&self, message: &Message) -> bool {
        match self {
            Participant::Sender(name) => message.sender == *name,
            Participant::Total => true,
        }
    }

    /// Human-readable label, used in chart titles and file names.
    pub fn label(&self) -> &str {
        match self {
            Participant::Sender(name) => name,
            Participant::Total => TOTAL_LABEL,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of participants, aggregate last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIndex {
    participants: Vec<Participant>,
}

impl UserIndex {
    /// Collects distinct senders in first-seen order and appends
    /// [`Participant::Total`] exactly once.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut participants: Vec<Participant> = Vec::new();
        for msg in messages {
            if !participants
                .iter()
                .any(|p| matches!(p, Participant::Sender(name) if *name == msg.sender))
            {
                participants.push(Participant::sender(msg.sender.clone()));
            }
        }
        participants.push(Participant::Total);

        Self { participants }
    }

    /// All participants, aggregate included as the last entry.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Real senders only, in index order.
    ///
    /// A fresh projection: the index itself keeps the aggregate.
    pub fn senders(&self) -> Vec<&str> {
        self.participants
            .iter()
            .filter_map(|p| match p {
                Participant::Sender(name) => Some(name.as_str()),
                Participant::Total => None,
            })
            .collect()
    }

    /// Looks a participant up by its label.
    ///
    /// Real senders win over the aggregate label, so a sender named "Total"
    /// is still reachable by name.
    pub fn find(&self, label: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| matches!(p, Participant::Sender(name) if name == label))
            .or_else(|| {
                (label == TOTAL_LABEL)
                    .then(|| self.participants.last())
                    .flatten()
            })
    }

    /// Returns `true` if `participant` is listed.
    pub fn contains(&self, participant: &Participant) -> bool {
        self.participants.contains(participant)
    }

    /// Number of entries, aggregate included.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always `false`: the aggregate is present even for an empty chat.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterates over all participants.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }
}

impl<'a> IntoIterator for &'a UserIndex {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Message::new(sender, ts, "x")
    }

    #[test]
    fn test_first_seen_order_with_total_last() {
        let index = UserIndex::from_messages(&[msg("Mary"), msg("John"), msg("Mary")]);
        assert_eq!(
            index.participants(),
            &[
                Participant::sender("Mary"),
                Participant::sender("John"),
                Participant::Total
            ]
        );
    }

    #[test]
    fn test_empty_chat_has_only_total() {
        let index = UserIndex::from_messages(&[]);
        assert_eq!(index.participants(), &[Participant::Total]);
        assert!(index.senders().is_empty());
        assert!(!index.is_empty());
    }

    #[test]
    fn test_sender_named_total_is_distinct() {
        let index = UserIndex::from_messages(&[msg("Total"), msg("Ann")]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.iter().filter(|p| p.is_total()).count(), 1);
        assert_eq!(index.find("Total"), Some(&Participant::sender("Total")));
        assert_eq!(index.senders(), vec!["Total", "Ann"]);
    }

    #[test]
    fn test_senders_projection_leaves_index_intact() {
        let index = UserIndex::from_messages(&[msg("A"), msg("B")]);
        let senders = index.senders();
        assert_eq!(senders, vec!["A", "B"]);
        assert_eq!(index.participants().last(), Some(&Participant::Total));
    }

    #[test]
    fn test_find() {
        let index = UserIndex::from_messages(&[msg("A")]);
        assert_eq!(index.find("A"), Some(&Participant::sender("A")));
        assert_eq!(index.find("Total"), Some(&Participant::Total));
        assert_eq!(index.find("Z"), None);
    }

    #[test]
    fn test_matches() {
        let m = msg("A");
        assert!(Participant::sender("A").matches(&m));
        assert!(!Participant::sender("B").matches(&m));
        assert!(Participant::Total.matches(&m));
    }
}
