//! Command-line argument definitions using clap

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dataset::RowFilter;

/// Default location of the dataset CSV, relative to the project root.
pub const DEFAULT_CSV_PATH: &str = "documents/cv_extraction.csv";

/// Directory the converter writes into, relative to the project root.
pub const JSON_OUT_DIR: &str = "documents/json_extraction";

/// File name of the converted JSON dataset.
pub const JSON_OUT_FILE: &str = "cv_extraction.json";

/// Cvx - manage the CV extraction dataset
#[derive(Parser, Debug)]
#[command(name = "cvx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert documents/cv_extraction.csv to a JSON array under
    /// documents/json_extraction/
    Convert,

    /// Update the cv_text column for matching candidate rows in place
    Update(UpdateArgs),
}

/// Arguments for the `update` subcommand.
///
/// At least one of --candidate-id / --candidate-name is required; the
/// payload sources --text and --text-file are mutually exclusive.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selector")
        .required(true)
        .multiple(true)
        .args(["candidate_id", "candidate_name"])
))]
#[command(group(ArgGroup::new("payload").args(["text", "text_file"])))]
pub struct UpdateArgs {
    /// Unique identifier of the candidate
    #[arg(long, value_name = "ID")]
    pub candidate_id: Option<String>,

    /// Display name of the candidate (when no candidate id is known)
    #[arg(long, value_name = "NAME")]
    pub candidate_name: Option<String>,

    /// Identifier of the job offer, to disambiguate shared names
    #[arg(long, value_name = "ID")]
    pub job_offer_id: Option<String>,

    /// CV text to inject (sanitized before storage)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Path of a text file containing the CV text; when neither --text
    /// nor --text-file is given the text is read from stdin
    #[arg(long, value_name = "FILE")]
    pub text_file: Option<PathBuf>,

    /// Path of the dataset CSV
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,
}

impl UpdateArgs {
    /// Filter criteria derived from the supplied flags.
    pub fn filter(&self) -> RowFilter {
        RowFilter {
            candidate_id: self.candidate_id.clone(),
            candidate_name: self.candidate_name.clone(),
            job_offer_id: self.job_offer_id.clone(),
        }
    }
}
