use serde::{Deserialize, Serialize};

use crate::chat::ChatLog;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::participants::Participant;
use crate::render::WordWeight;
use crate::stats::{
    BucketLabel, Granularity, PieSlice, pie_chart, time_chart, time_chart_title,
};

/// Shape of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    /// Ranked words of a word cloud.
    Cloud,
}

/// A chart ready to draw: parallel labels and values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTable {
    pub kind: ChartKind,
    pub title: String,
    /// Short identifier, usable as a file stem (`pie`, `hour_Total`, ...).
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl ChartTable {
    /// Pie chart of word volume per sender.
    pub fn pie(slices: &[PieSlice]) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: "Words per sender".to_string(),
            name: "pie".to_string(),
            labels: slices.iter().map(|s| s.sender.clone()).collect(),
            values: slices.iter().map(|s| s.words).collect(),
        }
    }

    /// Bar chart of message counts for one participant and granularity.
    pub fn time(
        participant: &Participant,
        granularity: Granularity,
        buckets: &[(BucketLabel, usize)],
    ) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: time_chart_title(participant, granularity),
            name: format!("{granularity}_{participant}"),
            labels: buckets.iter().map(|(label, _)| label.to_string()).collect(),
            values: buckets.iter().map(|(_, count)| *count).collect(),
        }
    }

    /// Word ranking of one participant's word cloud.
    pub fn cloud(participant: &Participant, words: &[WordWeight]) -> Self {
        Self {
            kind: ChartKind::Cloud,
            title: format!("Word cloud of {participant}"),
            name: format!("wordcloud_{participant}"),
            labels: words.iter().map(|w| w.word.clone()).collect(),
            values: words.iter().map(|w| w.count).collect(),
        }
    }

    /// Iterates over `(label, value)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the chart has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Draws charts. Return values are not consumed.
pub trait ChartRenderer {
    fn render(&mut self, table: &ChartTable) -> Result<()>;
}

/// Renderer that keeps every table it receives.
#[derive(Debug, Default)]
pub struct TableCollector {
    pub tables: Vec<ChartTable>,
}

impl ChartRenderer for TableCollector {
    fn render(&mut self, table: &ChartTable) -> Result<()> {
        self.tables.push(table.clone());
        Ok(())
    }
}

/// Renders the pie chart, then one bar chart per configured period and
/// participant (aggregate included).
///
/// Returns the number of charts rendered. Renderer errors stop the run.
pub fn render_charts<R: ChartRenderer + ?Sized>(
    chat: &ChatLog,
    config: &AnalysisConfig,
    renderer: &mut R,
) -> Result<usize> {
    let mut rendered = 0;

    let slices = pie_chart(chat, config.punctuation)?;
    renderer.render(&ChartTable::pie(&slices))?;
    rendered += 1;

    for &granularity in &config.periods {
        for participant in chat.users() {
            let buckets = time_chart(chat, participant, granularity);
            renderer.render(&ChartTable::time(participant, granularity, &buckets))?;
            rendered += 1;
        }
    }

    log::debug!("rendered {rendered} charts");
    Ok(rendered)
}
