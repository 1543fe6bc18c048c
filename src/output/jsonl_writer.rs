//! JSON Lines (JSONL) output writer.
//!
//! One row per line, so large word rankings can be streamed into other tools
//! without loading the whole table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::render::ChartTable;

#[derive(Serialize)]
struct JsonlRow<'a> {
    label: &'a str,
    value: usize,
}

/// Writes a chart table to a JSONL file.
///
/// # Format
/// ```text
/// {"label":"Ann","value":12}
/// {"label":"Ben","value":3}
/// ```
pub fn write_jsonl(table: &ChartTable, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_rows(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts a chart table to a JSONL string.
pub fn to_jsonl(table: &ChartTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(table: &ChartTable, writer: &mut W) -> Result<()> {
    for (label, value) in table.rows() {
        let json = serde_json::to_string(&JsonlRow { label, value })?;
        writeln!(writer, "{}", json)?;
    }
    Ok(())
}
