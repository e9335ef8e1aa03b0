//! CSV export of WHOIS contacts.
//!
//! One `label,value` row per `(role, field)` key, no header, always 36 rows.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::config::CsvQuoting;
use crate::error_handling::ExportError;
use crate::whois::ContactSet;

impl From<CsvQuoting> for QuoteStyle {
    fn from(quoting: CsvQuoting) -> Self {
        match quoting {
            CsvQuoting::Legacy => QuoteStyle::Never,
            CsvQuoting::Rfc4180 => QuoteStyle::Necessary,
        }
    }
}

/// Writes the contact rows to any writer.
///
/// Rows are `\n`-terminated, including the last one.
///
/// # Returns
///
/// The number of rows written.
pub fn write_contacts_csv<W: Write>(
    writer: W,
    contacts: &ContactSet,
    quoting: CsvQuoting,
) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(quoting.into())
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let rows = contacts.rows();
    for (label, value) in &rows {
        writer.write_record([label.as_str(), value.as_str()])?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Writes the contact rows to `output_path`, replacing any existing file.
///
/// The CSV is staged in a temporary file next to the destination and moved
/// into place once complete, so a failed run never leaves a partial file.
///
/// # Returns
///
/// The number of rows written, or an error if the file cannot be written.
pub fn export_csv(
    contacts: &ContactSet,
    output_path: &Path,
    quoting: CsvQuoting,
) -> Result<usize, ExportError> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|source| ExportError::Create {
        dir: dir.to_path_buf(),
        source,
    })?;

    let rows = write_contacts_csv(staged.as_file_mut(), contacts, quoting)?;
    staged.as_file().sync_all()?;

    // Staging files are created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    staged
        .persist(output_path)
        .map_err(|e| ExportError::Persist {
            path: output_path.to_path_buf(),
            source: e.error,
        })?;

    log::info!("Wrote {} rows to {}", rows, output_path.display());
    Ok(rows)
}
