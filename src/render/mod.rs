//! Seams to the rendering collaborators.
//!
//! chatplot computes what to draw; drawing is someone else's job. This module
//! defines what those collaborators receive:
//!
//! - [`ChartRenderer`] gets a [`ChartTable`] (labels plus values) for every
//!   pie and bar chart
//! - [`WordCloudRenderer`] gets a [`WordCloudRequest`] and one text blob per
//!   participant
//! - [`MaskLoader`] turns a mask path into a [`Mask`] pixel grid
//!
//! [`FrequencyCloud`] is a renderer that stops at the ranked word list a
//! drawing engine would lay out, which is enough for tabular output.

mod charts;
mod wordcloud;

pub use charts::{ChartKind, ChartRenderer, ChartTable, TableCollector, render_charts};
pub use wordcloud::{
    FrequencyCloud, Mask, MaskLoader, WordCloudRenderer, WordCloudRequest, WordWeight,
    word_clouds,
};
