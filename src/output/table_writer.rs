use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::format::{OutputFormat, write_to_format};
use crate::render::{ChartRenderer, ChartTable};

/// Turns a chart name into a file stem.
///
/// Sender names come straight from the export, so path separators and other
/// characters most filesystems reject are replaced with `_`.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    match stem.trim() {
        "" | "." | ".." => "_".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// [`ChartRenderer`] writing each table to `<dir>/<name>.<ext>`.
#[derive(Debug)]
pub struct TableWriter {
    dir: PathBuf,
    format: OutputFormat,
    written: Vec<PathBuf>,
}

impl TableWriter {
    /// Creates the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            format,
            written: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Files written so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path the next render of `table` writes to.
    ///
    /// A stem already written by this writer gets a `-2`, `-3`, ... suffix,
    /// so a sender named "Total", or two names that sanitize alike, never
    /// overwrite each other's tables.
    pub fn path_for(&self, table: &ChartTable) -> PathBuf {
        let stem = file_stem(&table.name);
        let ext = self.format.extension();
        let mut path = self.dir.join(format!("{stem}.{ext}"));
        let mut n = 2;
        while self.written.contains(&path) {
            path = self.dir.join(format!("{stem}-{n}.{ext}"));
            n += 1;
        }
        path
    }
}

impl ChartRenderer for TableWriter {
    fn render(&mut self, table: &ChartTable) -> Result<()> {
        let path = self.path_for(table);
        write_to_format(table, &path, self.format)?;
        debug!("wrote {} ({} rows)", path.display(), table.len());
        self.written.push(path);
        Ok(())
    }
}
