//! JSON export of a dataset

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::loader::Dataset;
use super::REQUIRED_FIELDS;

/// Convert one row into a JSON object.
///
/// The required fields come first in canonical order, defaulting to an
/// empty string when the column is absent; every other column follows in
/// header order.
pub fn record_to_json(dataset: &Dataset, row: usize) -> Map<String, Value> {
    let mut object = Map::new();

    for name in REQUIRED_FIELDS {
        let value = dataset.field(row, name).unwrap_or("");
        object.insert(name.to_string(), Value::String(value.to_string()));
    }

    for (idx, name) in dataset.header().iter().enumerate() {
        if object.contains_key(name) {
            continue;
        }
        object.insert(
            name.clone(),
            Value::String(dataset.rows()[row][idx].clone()),
        );
    }

    object
}

/// Serialize every row to a pretty-printed JSON array at `path`.
///
/// Two-space indentation, non-ASCII characters written literally, no
/// byte-order mark. Returns the number of records written.
pub fn write_json(dataset: &Dataset, path: &Path) -> Result<usize> {
    let records: Vec<Value> = (0..dataset.len())
        .map(|row| Value::Object(record_to_json(dataset, row)))
        .collect();

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Value::Array(records))
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON file: {}", path.display()))?;

    Ok(dataset.len())
}
