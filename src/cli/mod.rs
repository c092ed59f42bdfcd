//! CLI module - argument parsing and subcommand entry points

pub mod args;
pub mod convert;
pub mod update;

pub use args::{Cli, Commands, UpdateArgs, DEFAULT_CSV_PATH, JSON_OUT_DIR, JSON_OUT_FILE};
pub use convert::run_convert;
pub use update::run_update;
