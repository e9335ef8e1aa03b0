//! Raw WHOIS text acquisition.
//!
//! Text comes either from the external WHOIS client or from a saved file.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error_handling::LookupError;

/// Path value that selects standard input for `--input`.
pub const STDIN_PATH: &str = "-";

/// Where raw WHOIS text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisSource {
    /// Run the given WHOIS program with the domain as its only argument
    Command(String),
    /// Read previously captured output from a file (`-` for stdin)
    File(PathBuf),
}

/// Fetches raw WHOIS text for `domain` from `source`.
///
/// A WHOIS client that exits non-zero still has its stdout returned, since
/// registrars commonly print usable records alongside a failure status.
pub fn fetch_raw_whois(source: &WhoisSource, domain: &str) -> Result<String, LookupError> {
    match source {
        WhoisSource::Command(program) => run_whois_command(program, domain),
        WhoisSource::File(path) => read_whois_file(path),
    }
}

fn run_whois_command(program: &str, domain: &str) -> Result<String, LookupError> {
    log::info!("Running `{} {}`", program, domain);

    let output = Command::new(program)
        .arg(domain)
        .output()
        .map_err(|source| LookupError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!(
            "{} exited with status {} for {:?}: {}",
            program,
            output.status.code().unwrap_or(-1),
            domain,
            stderr.trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    log::debug!("{} returned {} byte(s)", program, stdout.len());
    Ok(stdout)
}

fn read_whois_file(path: &Path) -> Result<String, LookupError> {
    let mut bytes = Vec::new();

    if path.as_os_str() == STDIN_PATH {
        log::info!("Reading WHOIS output from stdin");
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|source| LookupError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;
    } else {
        log::info!("Reading WHOIS output from {}", path.display());
        bytes = std::fs::read(path).map_err(|source| LookupError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
