//! Configuration types for analysis and word clouds.
//!
//! These are plain builder-style structs with no CLI framework dependencies.
//!
//! - [`AnalysisConfig`] - what to parse and which charts to produce
//! - [`WordCloudConfig`] - how word clouds look and which words they skip
//!
//! # Example
//!
//! ```rust
//! use chatplot::config::{AnalysisConfig, ColorScheme, MaskSelector};
//! use chatplot::stats::Granularity;
//!
//! let config = AnalysisConfig::new()
//!     .with_mask(MaskSelector::Random)
//!     .with_color(ColorScheme::named("viridis"))
//!     .with_periods(vec![Granularity::Hour, Granularity::Year]);
//! assert_eq!(config.periods.len(), 2);
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::parsing::DEFAULT_PREFIX_WIDTH;
use crate::stats::{Granularity, PunctuationPolicy};

/// Mask images bundled with the tool, picked from by [`MaskSelector::Random`].
pub const MASK_CATALOGUE: &[&str] = &[
    "./masks/twitter_mask.png",
    "./masks/alicia_mask.png",
    "./masks/avestruz_mask.png",
    "./masks/gato_mask.png",
    "./masks/patada_mask.png",
    "./masks/pato_mask.png",
];

/// Colour map names understood by word-cloud renderers.
pub const COLOR_SCHEMES: &[&str] = &[
    "viridis", "plasma", "inferno", "magma", "cividis", "Greys", "Purples", "Blues", "Greens",
    "Oranges", "Reds", "YlOrBr", "YlOrRd", "OrRd", "PuRd", "RdPu", "BuPu", "GnBu", "PuBu",
    "YlGnBu", "PuBuGn", "BuGn", "YlGn", "binary", "gist_yarg", "gist_gray", "gray", "bone",
    "pink", "spring", "summer", "autumn", "winter", "cool", "Wistia", "hot", "afmhot",
    "gist_heat", "copper", "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu", "RdYlBu", "RdYlGn",
    "Spectral", "coolwarm", "bwr", "seismic",
];

/// Words every word cloud skips: media placeholders of Spanish exports.
pub const DEFAULT_EXTRA_STOP_WORDS: &[&str] = &["Multimedia", "omitido"];

/// Which mask shapes the word clouds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskSelector {
    /// No mask: rectangular clouds.
    #[default]
    None,
    /// A specific image file.
    Path(PathBuf),
    /// One entry of [`MASK_CATALOGUE`], chosen at random.
    Random,
}

impl MaskSelector {
    /// Resolves the selector to a concrete path, if any.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PathBuf> {
        match self {
            MaskSelector::None => None,
            MaskSelector::Path(path) => Some(path.clone()),
            MaskSelector::Random => MASK_CATALOGUE.choose(rng).map(PathBuf::from),
        }
    }
}

impl std::str::FromStr for MaskSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "none" => MaskSelector::None,
            s if s.eq_ignore_ascii_case("random") => MaskSelector::Random,
            path => MaskSelector::Path(PathBuf::from(path)),
        })
    }
}

/// Colour scheme of the word clouds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// A named colour map.
    Named(String),
    /// One entry of [`COLOR_SCHEMES`], chosen at random.
    #[default]
    Random,
}

impl ColorScheme {
    /// Creates a named scheme.
    pub fn named(name: impl Into<String>) -> Self {
        ColorScheme::Named(name.into())
    }

    /// Resolves the scheme to a colour map name.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            ColorScheme::Named(name) => name.clone(),
            ColorScheme::Random => COLOR_SCHEMES
                .choose(rng)
                .copied()
                .unwrap_or("viridis")
                .to_string(),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("random") {
            ColorScheme::Random
        } else {
            ColorScheme::named(s)
        })
    }
}

/// Options for one analysis run.
///
/// # Example
///
/// ```rust
/// use chatplot::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.prefix_width, 5);
/// assert_eq!(config.language, "spanish");
/// assert_eq!(config.periods.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Word-cloud mask (default: none)
    pub mask: MaskSelector,

    /// Word-cloud colour scheme (default: random)
    pub color: ColorScheme,

    /// Language of the stop-word list (default: "spanish")
    pub language: String,

    /// Time charts to produce (default: all granularities)
    pub periods: Vec<Granularity>,

    /// Characters stripped before each sender name (default: 5)
    pub prefix_width: usize,

    /// Punctuation handling for word counts (default: last mark only)
    pub punctuation: PunctuationPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mask: MaskSelector::default(),
            color: ColorScheme::default(),
            language: "spanish".to_string(),
            periods: Granularity::all().to_vec(),
            prefix_width: DEFAULT_PREFIX_WIDTH,
            punctuation: PunctuationPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word-cloud mask.
    #[must_use]
    pub fn with_mask(mut self, mask: MaskSelector) -> Self {
        self.mask = mask;
        self
    }

    /// Sets the word-cloud colour scheme.
    #[must_use]
    pub fn with_color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    /// Sets the stop-word language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets which time charts to produce.
    #[must_use]
    pub fn with_periods(mut self, periods: Vec<Granularity>) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the sender prefix width.
    #[must_use]
    pub fn with_prefix_width(mut self, width: usize) -> Self {
        self.prefix_width = width;
        self
    }

    /// Sets the punctuation policy.
    #[must_use]
    pub fn with_punctuation(mut self, policy: PunctuationPolicy) -> Self {
        self.punctuation = policy;
        self
    }

    /// Derives the word-cloud settings, with default appearance.
    pub fn word_cloud(&self, stop_words: HashSet<String>) -> WordCloudConfig {
        WordCloudConfig::new()
            .with_mask(self.mask.clone())
            .with_color(self.color.clone())
            .with_stop_words(stop_words)
    }
}

/// Word-cloud appearance and vocabulary.
///
/// Defaults: 2000 words, no contour (width 0, colour black), white
/// background, and [`DEFAULT_EXTRA_STOP_WORDS`] on top of the language list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Language stop words
    pub stop_words: HashSet<String>,

    /// Additional words to skip
    pub extra_stop_words: Vec<String>,

    /// Maximum words drawn per cloud
    pub max_words: usize,

    /// Contour line width, 0 for none
    pub contour_width: u32,

    /// Contour colour
    pub contour_color: String,

    /// Background colour
    pub background_color: String,

    /// Mask selection
    pub mask: MaskSelector,

    /// Colour scheme selection
    pub color: ColorScheme,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            stop_words: HashSet::new(),
            extra_stop_words: DEFAULT_EXTRA_STOP_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            max_words: 2000,
            contour_width: 0,
            contour_color: "black".to_string(),
            background_color: "white".to_string(),
            mask: MaskSelector::default(),
            color: ColorScheme::default(),
        }
    }
}

impl WordCloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: HashSet<String>) -> Self {
        self.stop_words = words;
        self
    }

    /// Replaces the extra stop words.
    #[must_use]
    pub fn with_extra_stop_words(mut self, words: Vec<String>) -> Self {
        self.extra_stop_words = words;
        self
    }

    /// Sets the maximum number of words per cloud.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Sets the contour width and colour.
    #[must_use]
    pub fn with_contour(mut self, width: u32, color: impl Into<String>) -> Self {
        self.contour_width = width;
        self.contour_color = color.into();
        self
    }

    /// Sets the background colour.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the mask.
    #[must_use]
    pub fn with_mask(mut self, mask: MaskSelector) -> Self {
        self.mask = mask;
        self
    }

    /// Sets the colour scheme.
    #[must_use]
    pub fn with_color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    /// Language stop words merged with the extra ones.
    pub fn all_stop_words(&self) -> HashSet<String> {
        self.stop_words
            .iter()
            .chain(&self.extra_stop_words)
            .cloned()
            .collect()
    }
}

/// Parses a stop-word list: one word per line, blank lines and `#` comments
/// ignored.
pub fn parse_stop_words(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
