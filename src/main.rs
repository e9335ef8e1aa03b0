//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_csv` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whois_csv::initialization::init_logger_with;
use whois_csv::{run_export, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(&config) {
        Ok(report) => {
            println!(
                "✅ Wrote {} rows ({} field{} populated) to {}",
                report.rows,
                report.populated_fields,
                if report.populated_fields == 1 { "" } else { "s" },
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("whois_csv error: {:#}", e);
            process::exit(1);
        }
    }
}
