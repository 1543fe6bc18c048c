//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::render::ChartTable;

/// Writes a chart table to a JSON file.
///
/// # Format
/// ```json
/// {
///   "kind": "bar",
///   "title": "Hourly messages of Ann",
///   "name": "hour_Ann",
///   "labels": ["0", "1"],
///   "values": [0, 4]
/// }
/// ```
pub fn write_json(table: &ChartTable, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a chart table to a pretty-printed JSON string.
pub fn to_json(table: &ChartTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}
