//! Chart table writers.
//!
//! Every chart is written as plain rows, one per label:
//! - [`write_csv`] / [`to_csv`] - `Label;Value` CSV - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole table as a JSON object - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one `{"label", "value"}` object per line - requires `json-output` feature
//!
//! [`TableWriter`] plugs these into [`render_charts`](crate::render::render_charts)
//! by writing each table to `<dir>/<name>.<ext>`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatplot::Result<()> {
//! use chatplot::ChatLog;
//! use chatplot::config::AnalysisConfig;
//! use chatplot::format::OutputFormat;
//! use chatplot::output::TableWriter;
//! use chatplot::render::render_charts;
//!
//! let chat = ChatLog::parse("01/02/23, 10:00 - Ann: hello\n");
//! let mut writer = TableWriter::new("charts", OutputFormat::Csv)?;
//! render_charts(&chat, &AnalysisConfig::new(), &mut writer)?;
//! println!("{} files", writer.written().len());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod table_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use table_writer::{TableWriter, file_stem};
