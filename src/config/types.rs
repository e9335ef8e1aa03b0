//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CSV_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_WHOIS_COMMAND, WHOIS_COMMAND_ENV,
};
use crate::whois::WhoisSource;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How CSV values are quoted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CsvQuoting {
    /// Never quote; embedded commas shift columns exactly as the legacy tool did
    Legacy,
    /// Quote values containing commas, quotes or newlines
    Rfc4180,
}

/// Run configuration, parsed from the command line or built programmatically.
///
/// # Examples
///
/// ```no_run
/// use whois_csv::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     output_dir: PathBuf::from("/tmp"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "whois_csv",
    version,
    about = "Writes Registrant/Admin/Tech WHOIS contacts for a domain to <domain>.csv"
)]
pub struct Config {
    /// Domain to look up; also the base name of the CSV file
    #[arg(default_value = "")]
    pub domain: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Directory the CSV file is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// WHOIS client program
    #[arg(long, env = WHOIS_COMMAND_ENV, default_value = DEFAULT_WHOIS_COMMAND)]
    pub whois_command: String,

    /// Read raw WHOIS output from this file (`-` for stdin) instead of running the client
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// CSV quoting mode
    #[arg(long, value_enum, default_value_t = CsvQuoting::Legacy)]
    pub quoting: CsvQuoting,
}

impl Config {
    /// Source the raw WHOIS text is taken from.
    pub fn whois_source(&self) -> WhoisSource {
        match &self.input {
            Some(path) => WhoisSource::File(path.clone()),
            None => WhoisSource::Command(self.whois_command.clone()),
        }
    }

    /// Path of the CSV file: `<output_dir>/<domain>.csv`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.domain, CSV_EXTENSION))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            whois_command: DEFAULT_WHOIS_COMMAND.to_string(),
            input: None,
            quoting: CsvQuoting::Legacy,
        }
    }
}
