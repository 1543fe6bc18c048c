//! Message counts bucketed by calendar field.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::chat::ChatLog;
use crate::error::ChatplotError;
use crate::participants::Participant;

/// Calendar field used to bucket messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Hour of day; all 24 hours are always reported.
    Hour,
    /// Day of month.
    Day,
    /// Month of year.
    Month,
    /// Calendar year.
    Year,
    /// Calendar date, giving the chat's progression over time.
    Progression,
}

impl Granularity {
    /// Every granularity, in report order.
    pub fn all() -> &'static [Granularity] {
        &[
            Granularity::Hour,
            Granularity::Day,
            Granularity::Month,
            Granularity::Year,
            Granularity::Progression,
        ]
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::Progression => "progression",
        }
    }

    fn label_of(self, message: &Message) -> BucketLabel {
        match self {
            Granularity::Hour => BucketLabel::Hour(message.hour()),
            Granularity::Day => BucketLabel::Day(message.day()),
            Granularity::Month => BucketLabel::Month(message.month()),
            Granularity::Year => BucketLabel::Year(message.year()),
            Granularity::Progression => BucketLabel::Date(message.date()),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = ChatplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            "progression" => Ok(Granularity::Progression),
            _ => Err(ChatplotError::invalid_granularity(s)),
        }
    }
}

/// X-axis label of a time bucket.
///
/// Serializes as the bare value, so the variant is not recoverable and the
/// type is write-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum BucketLabel {
    Hour(u32),
    Day(u32),
    Month(u32),
    Year(i32),
    Date(NaiveDate),
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketLabel::Hour(v) | BucketLabel::Day(v) | BucketLabel::Month(v) => write!(f, "{v}"),
            BucketLabel::Year(v) => write!(f, "{v}"),
            BucketLabel::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Counts `participant`'s messages per bucket of `granularity`.
///
/// Hourly results always hold 24 pairs, hours `0..=23`, zero-filled. Every
/// other granularity reports only the values that occur, in ascending
/// order. A participant with no messages (including an unknown sender)
/// yields 24 zero hours or an empty list.
///
/// # Example
///
/// ```
/// use chatplot::ChatLog;
/// use chatplot::participants::Participant;
/// use chatplot::stats::{time_chart, Granularity};
///
/// let chat = ChatLog::parse("01/02/23, 10:00 - John: hello\n");
/// let hours = time_chart(&chat, &Participant::Total, Granularity::Hour);
/// assert_eq!(hours.len(), 24);
/// assert_eq!(hours[10].1, 1);
/// ```
pub fn time_chart(
    chat: &ChatLog,
    participant: &Participant,
    granularity: Granularity,
) -> Vec<(BucketLabel, usize)> {
    let mut buckets: BTreeMap<BucketLabel, usize> = BTreeMap::new();
    if granularity == Granularity::Hour {
        buckets.extend((0..24).map(|h| (BucketLabel::Hour(h), 0)));
    }

    for message in chat.messages_of(participant) {
        *buckets.entry(granularity.label_of(message)).or_insert(0) += 1;
    }

    buckets.into_iter().collect()
}

/// Chart title for a time bucket chart.
pub fn time_chart_title(participant: &Participant, granularity: Granularity) -> String {
    match granularity {
        Granularity::Hour => format!("Hourly messages of {participant}"),
        other => format!("Messages per {other} {participant}"),
    }
}
