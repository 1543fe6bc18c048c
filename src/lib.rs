//! # chatplot
//!
//! A Rust library for turning exported WhatsApp chat logs into statistics
//! ready to plot: word clouds, a words-per-sender pie chart, and message
//! counts by hour, day, month, year or calendar date.
//!
//! ## Overview
//!
//! Exports are plain text, one message per line:
//!
//! ```text
//! 01/02/23, 10:00 - ~ John: hello
//! ```
//!
//! The [`parsing`] pipeline normalizes lines, drops system notices and rows
//! whose timestamp doesn't parse, and produces a validated table of
//! [`Message`]s. [`ChatLog`] wraps that table together with the participant
//! index (every sender plus the `Total` aggregate) and the per-participant
//! text blobs. Everything else is a read-only view over a [`ChatLog`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatplot::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chat = ChatLog::parse(
//!         "01/02/23, 10:00 - ~ John: hello\n02/02/23, 11:00 - ~ Mary: hi there\n",
//!     );
//!
//!     // Words per sender, aggregate excluded
//!     let pie = pie_chart(&chat, PunctuationPolicy::default())?;
//!     assert_eq!(pie.len(), 2);
//!
//!     // 24 hourly buckets, zero-filled
//!     let hours = time_chart(&chat, &Participant::Total, Granularity::Hour);
//!     assert_eq!(hours.len(), 24);
//!
//!     // Every chart through one renderer
//!     let mut collector = TableCollector::default();
//!     render_charts(&chat, &AnalysisConfig::new(), &mut collector)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line normalizer, message filter, record builder, timestamp validator
//! - [`chat`] - [`ChatLog`], the parsed chat and its text blobs
//! - [`participants`] - [`Participant`](participants::Participant) and the user index
//! - [`stats`] - Word statistics, pie-chart shares, time buckets
//! - [`render`] - Chart and word-cloud renderer traits, [`render_charts`](render::render_charts)
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`WordCloudConfig`](config::WordCloudConfig), mask and colour catalogues
//! - [`format`] / [`output`] - Writing chart tables as CSV, JSON or JSONL
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatplotError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parsing;
pub mod participants;
pub mod render;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use chat::ChatLog;
pub use error::{ChatplotError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatLog, Message};

    pub use crate::error::{ChatplotError, Result};

    pub use crate::participants::{Participant, UserIndex};

    pub use crate::config::{AnalysisConfig, ColorScheme, MaskSelector, WordCloudConfig};

    pub use crate::stats::{
        BucketLabel, Granularity, PunctuationPolicy, pie_chart, time_chart, word_stats,
    };

    pub use crate::render::{
        ChartRenderer, ChartTable, FrequencyCloud, MaskLoader, TableCollector,
        WordCloudRenderer, render_charts,
    };

    pub use crate::format::{OutputFormat, write_to_format};
    pub use crate::output::TableWriter;
}
