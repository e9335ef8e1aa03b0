//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failures while acquiring raw WHOIS text.
///
/// These never abort a run: the orchestrator logs them and formats empty input
/// so the CSV template stays intact.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The WHOIS program could not be started (missing binary, permissions).
    #[error("Failed to run WHOIS client `{program}`: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// Saved WHOIS output could not be read.
    #[error("Failed to read WHOIS input {}: {source}", path.display())]
    ReadInput {
        /// File that was read (`-` for stdin)
        path: PathBuf,
        /// Underlying read error
        source: std::io::Error,
    },
}

/// Failures while writing the CSV file. These are the only fatal errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The temporary output file could not be created in the target directory.
    #[error("Failed to create output file in {}: {source}", dir.display())]
    Create {
        /// Destination directory
        dir: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing a CSV record failed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing or finalizing the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The finished file could not be moved into place.
    #[error("Failed to persist {}: {source}", path.display())]
    Persist {
        /// Final output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
