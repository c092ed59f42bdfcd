//! Shared test utilities and fixture builders

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Canonical dataset header used by most fixtures.
pub const FIXTURE_HEADER: &str = "candidate_name,job_title,cv_text,job_offer_id,candidate_id";

/// Create a temporary project root containing
/// `documents/cv_extraction.csv` with the given content.
pub fn create_project(csv_content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let documents = dir.path().join("documents");
    fs::create_dir_all(&documents).unwrap();
    let csv_path = documents.join("cv_extraction.csv");
    fs::write(&csv_path, csv_content).unwrap();
    (dir, csv_path)
}

/// Three candidates, two of them sharing a name on different offers.
pub fn ambiguous_fixture() -> String {
    format!(
        "{}\n\
         Jane Doe,Engineer,old text one,JOB1,C1\n\
         Jane Doe,Analyst,old text two,JOB2,C2\n\
         John Smith,Manager,other text,JOB3,C3\n",
        FIXTURE_HEADER
    )
}

/// Two rows erroneously sharing the same candidate id.
pub fn duplicate_id_fixture() -> String {
    format!(
        "{}\n\
         Jane Doe,Engineer,first copy,JOB1,C7\n\
         Jane Doe,Engineer,second copy,JOB2,C7\n",
        FIXTURE_HEADER
    )
}

/// Invoke the cvx binary with the given project root as working
/// directory.
pub fn cvx(project_root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cvx").unwrap();
    cmd.current_dir(project_root);
    cmd
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
