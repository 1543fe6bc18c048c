//! The parsed chat: validated table, user index and text blobs.
//!
//! [`ChatLog::parse`] is the single entry point. It runs the
//! [`parsing`](crate::parsing) pipeline once and returns an immutable value;
//! every chart and word cloud is a read-only view over it.
//!
//! # Example
//!
//! ```
//! use chatplot::ChatLog;
//! use chatplot::participants::Participant;
//!
//! let chat = ChatLog::parse(
//!     "01/02/23, 10:00 - ~ John: hello\n02/02/23, 11:00 - ~ Mary: hi there\n",
//! );
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.users().senders(), vec!["John", "Mary"]);
//! assert_eq!(chat.text_blob(&Participant::Total)?, "hello hi there");
//! # Ok::<(), chatplot::ChatplotError>(())
//! ```

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::Message;
use crate::config::WordCloudConfig;
use crate::error::{ChatplotError, Result};
use crate::parsing::{DEFAULT_PREFIX_WIDTH, ParseReport, parse_messages};
use crate::participants::{Participant, UserIndex};
use crate::render::{MaskLoader, WordCloudRenderer, word_clouds};
use crate::stats::{PunctuationPolicy, WordCounts, count_words};

/// A parsed chat export.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<Message>,
    users: UserIndex,
    report: ParseReport,
    blobs: OnceCell<HashMap<Participant, String>>,
}

impl ChatLog {
    /// Parses export text with the default sender prefix width.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, DEFAULT_PREFIX_WIDTH)
    }

    /// Parses export text, stripping `prefix_width` characters before each
    /// sender name.
    pub fn parse_with(text: &str, prefix_width: usize) -> Self {
        let (messages, report) = parse_messages(text, prefix_width);
        let users = UserIndex::from_messages(&messages);
        Self {
            messages,
            users,
            report,
            blobs: OnceCell::new(),
        }
    }

    /// Wraps already validated messages.
    ///
    /// No lines were read, so the report only counts `messages`.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let users = UserIndex::from_messages(&messages);
        let report = ParseReport {
            messages: messages.len(),
            ..ParseReport::default()
        };
        Self {
            messages,
            users,
            report,
            blobs: OnceCell::new(),
        }
    }

    /// The validated table, in file order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Participants, aggregate last.
    pub fn users(&self) -> &UserIndex {
        &self.users
    }

    /// Line counts from parsing.
    pub fn report(&self) -> ParseReport {
        self.report
    }

    /// Number of validated messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no line survived parsing.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages belonging to `participant`, in table order.
    pub fn messages_of<'a>(
        &'a self,
        participant: &'a Participant,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| participant.matches(m))
    }

    /// All content of `participant` joined by single spaces.
    ///
    /// Blobs for every participant are built on first call and reused.
    pub fn text_blob(&self, participant: &Participant) -> Result<&str> {
        self.text_blobs()
            .get(participant)
            .map(String::as_str)
            .ok_or_else(|| ChatplotError::UnknownParticipant(participant.to_string()))
    }

    /// Text blobs keyed by participant, aggregate included.
    pub fn text_blobs(&self) -> &HashMap<Participant, String> {
        self.blobs.get_or_init(|| {
            self.users
                .iter()
                .map(|p| (p.clone(), self.concatenate(p)))
                .collect()
        })
    }

    /// Token frequencies of `participant`'s text blob.
    pub fn word_counts(
        &self,
        participant: &Participant,
        policy: PunctuationPolicy,
    ) -> Result<WordCounts> {
        Ok(count_words(self.text_blob(participant)?, policy))
    }

    /// Renders a word cloud for every participant, aggregate included.
    ///
    /// "Random" mask and colour selections are drawn from the thread RNG.
    /// See [`word_clouds`] for a seeded variant.
    pub fn word_clouds<R: WordCloudRenderer + ?Sized>(
        &self,
        config: &WordCloudConfig,
        loader: &dyn MaskLoader,
        renderer: &R,
    ) -> Result<Vec<(Participant, R::Output)>> {
        word_clouds(self, config, loader, renderer, &mut rand::thread_rng())
    }

    fn concatenate(&self, participant: &Participant) -> String {
        self.messages_of(participant)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
