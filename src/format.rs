//! Output format types for chart tables.
//!
//! These types don't depend on CLI frameworks, so library users can pick a
//! format without pulling in clap.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatplot::Result<()> {
//! use chatplot::ChatLog;
//! use chatplot::format::{OutputFormat, to_format_string};
//! use chatplot::render::ChartTable;
//! use chatplot::stats::pie_chart;
//!
//! let chat = ChatLog::parse("01/02/23, 10:00 - Ann: hello there\n");
//! let table = ChartTable::pie(&pie_chart(&chat, Default::default())?);
//!
//! let csv = to_format_string(&table, OutputFormat::Csv)?;
//! assert!(csv.contains("Ann;2"));
//!
//! let format: OutputFormat = "ndjson".parse()?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatplotError, Result};
use crate::render::ChartTable;

/// Output format for chart tables.
///
/// # Example
///
/// ```rust
/// use chatplot::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// `Label;Value` rows with semicolon delimiter (default)
    #[default]
    Csv,

    /// The whole table, title and kind included, as one JSON object
    Json,

    /// JSON Lines - one `{"label", "value"}` object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatplotError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

fn feature_error(format: OutputFormat) -> ChatplotError {
    ChatplotError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            }
        ),
    )
}

/// Writes a chart table to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    table: &ChartTable,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_error(format)),
    }
}

/// Converts a chart table to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(table: &ChartTable, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(table),
        #[allow(unreachable_patterns)]
        _ => Err(feature_error(format)),
    }
}
