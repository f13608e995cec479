//! keyscript CLI
//!
//! Loads a JSON-encoded script and runs it against the stdout/stderr console.

use keyscript_core::cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
