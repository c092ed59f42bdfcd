//! In-place cv_text updates for matched candidate rows

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use console::style;

use crate::cli::args::UpdateArgs;
use crate::dataset::{find_matches, resolve_targets, sanitize_for_csv, Dataset, CV_TEXT_FIELD};

/// Run the update against the dataset CSV.
///
/// The payload comes from --text, --text-file or stdin, is sanitized to
/// a single CSV-safe line and written into the cv_text column of every
/// resolved row; then the whole dataset is rewritten in original row and
/// column order. Nothing is written when resolution fails.
pub fn run_update(args: &UpdateArgs) -> Result<()> {
    let payload = read_payload(args)?;
    let cleaned = sanitize_for_csv(&payload);

    let mut dataset = Dataset::load(&args.csv)?;
    dataset.ensure_required_columns();

    let filter = args.filter();
    let matches = find_matches(&dataset, &filter);
    let targets = resolve_targets(&matches, filter.candidate_id.is_some())?;

    for &row in &targets {
        dataset.set_field(row, CV_TEXT_FIELD, &cleaned);
    }

    dataset.save(&args.csv)?;

    println!(
        "{} Updated {} record(s) in {}",
        style("✓").green().bold(),
        targets.len(),
        args.csv.display()
    );

    Ok(())
}

/// Resolve the raw CV text from the configured source.
fn read_payload(args: &UpdateArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.text_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()));
    }

    // Multi-line paste support: read stdin until end of stream.
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read CV text from stdin")?;
    Ok(buffer)
}
