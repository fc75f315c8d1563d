//! file-sorter CLI
//!
//! Silent by design: every outcome, including bad arguments past parsing,
//! goes to the log file.

use clap::Parser;
use file_sorter::config::{CliArgs, SortConfig};
use file_sorter::core::FileSorter;
use file_sorter::logging::init_logging;

fn main() {
    let args = CliArgs::parse();

    // The log file is the only reporting channel; without it, say so once.
    if let Err(e) = init_logging(&args.log_file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match SortConfig::from_cli(&args) {
        Ok(config) => FileSorter::new(config).run_logged(),
        Err(e) => tracing::error!("Runtime error: {}", e),
    }
}
