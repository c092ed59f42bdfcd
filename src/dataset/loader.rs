//! CSV dataset loading and saving with preserved row and column order

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::REQUIRED_FIELDS;

/// A CSV dataset held fully in memory.
///
/// Rows are untyped string cells aligned to a single header vector, in
/// original file order. Cells are never re-typed on load, so a load/save
/// cycle only changes what the caller explicitly mutates.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from already-parsed parts.
    ///
    /// Rows are width-normalized to the header: short rows are padded
    /// with empty cells, overlong rows are truncated.
    pub fn from_parts(header: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        for row in &mut rows {
            row.resize(header.len(), String::new());
        }
        Dataset { header, rows }
    }

    /// Read a dataset from a CSV file.
    ///
    /// A leading UTF-8 byte-order mark is tolerated and stripped. Ragged
    /// rows are width-normalized to the header.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
        let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to parse CSV header: {}", path.display()))?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("Failed to parse CSV row: {}", path.display()))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Dataset::from_parts(header, rows))
    }

    /// Write the dataset back to a CSV file (UTF-8, no byte-order mark).
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

        writer
            .write_record(&self.header)
            .context("Failed to write CSV header")?;
        for row in &self.rows {
            writer.write_record(row).context("Failed to write CSV row")?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush CSV file: {}", path.display()))?;
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Cell value for a named column in the given row.
    pub fn field(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Overwrite a cell. Does nothing when the row or column is absent;
    /// call [`Dataset::ensure_required_columns`] first for the required
    /// set.
    pub fn set_field(&mut self, row: usize, name: &str, value: &str) {
        if let Some(idx) = self.column_index(name) {
            if let Some(r) = self.rows.get_mut(row) {
                r[idx] = value.to_string();
            }
        }
    }

    /// Guarantee that every required column exists in the header and in
    /// every row, appending empty columns at the end where missing.
    pub fn ensure_required_columns(&mut self) {
        for name in REQUIRED_FIELDS {
            if self.column_index(name).is_none() {
                self.header.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }
    }
}
