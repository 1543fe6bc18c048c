//! Statistics behind the charts.
//!
//! - [`words`] - token frequencies per text blob
//! - [`pie`] - word-volume share per sender
//! - [`time`] - message counts per hour, day, month, year or date

pub mod pie;
pub mod time;
pub mod words;

pub use pie::{PieSlice, pie_chart, pie_shares};
pub use time::{BucketLabel, Granularity, time_chart, time_chart_title};
pub use words::{PUNCTUATION, PunctuationPolicy, WordCounts, count_words, word_stats};
