//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::analysis_config`] and [`Args::word_cloud_config`] turn parsed
//! arguments into the library's configuration types, so the binary holds no
//! option logic of its own.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ColorScheme, MaskSelector, WordCloudConfig};
use crate::stats::{Granularity, PunctuationPolicy};

/// Turn a WhatsApp chat export into word clouds, a words-per-sender pie
/// chart and message-frequency bar charts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatplot")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatplot chat.txt
    chatplot chat.txt -o charts --format json
    chatplot chat.txt --period hour --period year
    chatplot chat.txt --mask random --color viridis --stop-words spanish.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Directory the chart tables are written to
    #[arg(short, long, default_value = "chatplot_output")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Time charts to produce: hour, day, month, year, progression (default: all)
    #[arg(long = "period", value_name = "PERIOD")]
    pub periods: Vec<Granularity>,

    /// Word-cloud mask: an image path, "random" or "none"
    #[arg(long, value_name = "PATH", default_value = "none")]
    pub mask: MaskSelector,

    /// Word-cloud colour map name, or "random"
    #[arg(long, value_name = "NAME", default_value = "random")]
    pub color: ColorScheme,

    /// Stop-word language, resolved to `<stop-words-dir>/<language>.txt`
    #[arg(long, default_value = "spanish")]
    pub language: String,

    /// Stop-word file, one word per line (overrides --language)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Directory searched for `<language>.txt` stop-word lists
    #[arg(long, value_name = "DIR", default_value = "stopwords")]
    pub stop_words_dir: PathBuf,

    /// Extra word left out of the word clouds (repeatable)
    #[arg(long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Characters stripped before each sender name
    #[arg(long, default_value_t = crate::parsing::DEFAULT_PREFIX_WIDTH)]
    pub prefix_width: usize,

    /// Maximum number of words per word cloud
    #[arg(long, default_value_t = 2000)]
    pub max_words: usize,

    /// Strip every punctuation mark from words, not only the last one
    #[arg(long)]
    pub strip_all_punctuation: bool,

    /// Skip the word clouds
    #[arg(long)]
    pub no_clouds: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Analysis options selected on the command line.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new()
            .with_mask(self.mask.clone())
            .with_color(self.color.clone())
            .with_language(self.language.clone())
            .with_prefix_width(self.prefix_width);
        if !self.periods.is_empty() {
            config = config.with_periods(self.periods.clone());
        }
        if self.strip_all_punctuation {
            config = config.with_punctuation(PunctuationPolicy::StripAll);
        }
        config
    }

    /// Word-cloud options, given the loaded stop-word list.
    pub fn word_cloud_config(&self, stop_words: HashSet<String>) -> WordCloudConfig {
        let mut config = self
            .analysis_config()
            .word_cloud(stop_words)
            .with_max_words(self.max_words);
        config.extra_stop_words.extend(self.exclude.iter().cloned());
        config
    }

    /// Stop-word file to read: `--stop-words`, or the language list.
    pub fn stop_words_path(&self) -> PathBuf {
        self.stop_words.clone().unwrap_or_else(|| {
            self.stop_words_dir
                .join(format!("{}.txt", self.language))
        })
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatplot::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Label;Value` CSV with semicolon delimiter
    #[default]
    Csv,

    /// One JSON object per chart
    Json,

    /// JSON Lines - one row per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
