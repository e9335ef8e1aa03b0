//! whois_csv library: WHOIS contact formatting
//!
//! Looks up a domain with the system WHOIS client, extracts the Registrant,
//! Admin and Tech contact fields, and writes them to `<domain>.csv` as a fixed
//! 36-row `label,value` table.
//!
//! # Example
//!
//! ```no_run
//! use whois_csv::{run_export, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(&config)?;
//! println!("{} fields written to {}", report.populated_fields, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The row schema never varies: lookups that fail or return no contact lines
//! still produce all 36 rows with empty values.

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod whois;

// Re-export public API
pub use config::{Config, CsvQuoting, LogFormat, LogLevel};
pub use run::{run_export, ExportReport};

// Internal run module (acquire, parse, write)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use std::path::PathBuf;

    use crate::app::log_contact_summary;
    use crate::config::Config;
    use crate::export::export_csv;
    use crate::whois::{fetch_raw_whois, parse_contacts};

    /// Results of a formatting run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Domain that was looked up
        pub domain: String,
        /// CSV file that was written
        pub output_path: PathBuf,
        /// Rows written (always 36)
        pub rows: usize,
        /// Contact fields holding a non-empty value
        pub populated_fields: usize,
        /// Whether raw WHOIS text was acquired without error
        pub lookup_succeeded: bool,
    }

    /// Looks up `config.domain`, parses its contacts and writes the CSV.
    ///
    /// Failure to acquire WHOIS text is logged and treated as empty input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output file cannot be written.
    pub fn run_export(config: &Config) -> Result<ExportReport> {
        if config.domain.is_empty() {
            warn!("No domain given; querying with an empty domain");
        }

        let (raw, lookup_succeeded) = match fetch_raw_whois(&config.whois_source(), &config.domain)
        {
            Ok(raw) => (raw, true),
            Err(e) => {
                warn!("{}; continuing with empty WHOIS output", e);
                (String::new(), false)
            }
        };

        let contacts = parse_contacts(&raw);
        log_contact_summary(&config.domain, &contacts);

        let output_path = config.output_path();
        let rows = export_csv(&contacts, &output_path, config.quoting)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        info!("Finished {:?}", config.domain);

        Ok(ExportReport {
            domain: config.domain.clone(),
            output_path,
            rows,
            populated_fields: contacts.populated_count(),
            lookup_succeeded,
        })
    }
}
