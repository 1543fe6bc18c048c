//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::render::ChartTable;

/// Writes a chart table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Label`, `Value`
/// - Encoding: UTF-8
pub fn write_csv(table: &ChartTable, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(table, file)
}

/// Converts a chart table to a CSV string.
pub fn to_csv(table: &ChartTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(table: &ChartTable, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(["Label", "Value"])?;
    for (label, value) in table.rows() {
        writer.write_record([label, value.to_string().as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
