//! CSV to JSON conversion of the extraction dataset

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::{DEFAULT_CSV_PATH, JSON_OUT_DIR, JSON_OUT_FILE};
use crate::dataset::{write_json, Dataset};

/// Run the CSV to JSON conversion against the fixed project paths.
///
/// Reads `documents/cv_extraction.csv`, guarantees the required keys on
/// every exported object and writes the pretty-printed array to
/// `documents/json_extraction/cv_extraction.json`, creating the output
/// directory when missing.
pub fn run_convert() -> Result<()> {
    let input = Path::new(DEFAULT_CSV_PATH);
    let out_dir = Path::new(JSON_OUT_DIR);
    let output = out_dir.join(JSON_OUT_FILE);

    println!("\n {} Converting CSV to JSON", style("◆").cyan().bold());
    println!("   Input:  {}", style(input.display()).dim());
    println!("   Output: {}", style(output.display()).dim());
    println!();

    let spinner = io_spinner("Reading CSV...");
    let dataset = Dataset::load(input)?;
    spinner.finish_with_message(format!(
        "{} Loaded {} rows × {} columns",
        style("✓").green(),
        dataset.len(),
        dataset.header().len()
    ));

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let spinner = io_spinner("Writing JSON...");
    let written = write_json(&dataset, &output)?;
    spinner.finish_with_message(format!("{} JSON written", style("✓").green()));

    println!();
    println!("Wrote {} records to {}", written, output.display());

    Ok(())
}

/// Spinner shown while the dataset is read or written.
fn io_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
