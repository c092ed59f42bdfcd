//! Cvx: CV Extraction Dataset CLI
//!
//! Two single-shot operations over the CV extraction dataset: a JSON
//! export of the full CSV and an in-place update of the cv_text column
//! for matched candidate rows.

mod cli;
mod dataset;

use clap::Parser;

use cli::{run_convert, run_update, Cli, Commands};
use dataset::MatchError;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Convert => run_convert(),
        Commands::Update(args) => run_update(args),
    };

    if let Err(err) = result {
        // Match-resolution failures carry their own exit codes so shell
        // callers can tell "not found" from "ambiguous".
        if let Some(match_err) = err.downcast_ref::<MatchError>() {
            eprintln!("{}", match_err);
            std::process::exit(match_err.exit_code());
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
