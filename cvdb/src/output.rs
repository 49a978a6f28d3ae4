//! Rendering records as CSV
//!
//! Every field is wrapped in double quotes, but the content itself is written as it is. Quotes or
//! commas inside a field are not escaped, consumers of the existing files rely on exactly this
//! format.

use crate::model::Vulnerability;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Column names, including the historic spelling of "Diclosed At".
pub const HEADER: [&str; 7] = [
    "Title",
    "Severity",
    "Published At",
    "Diclosed At",
    "Affected CSPs",
    "URL",
    "Source",
];

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to flush CSV: {0}")]
    Io(#[from] io::Error),
}

fn quoted(field: &str) -> String {
    format!("\"{field}\"")
}

fn row(vulnerability: &Vulnerability) -> [String; 7] {
    [
        quoted(&vulnerability.title),
        quoted(&vulnerability.severity),
        quoted(&vulnerability.published_at),
        quoted(&vulnerability.disclosed_at),
        quoted(&vulnerability.affected_platforms.join(",")),
        quoted(&vulnerability.display_url),
        quoted(&vulnerability.source_url),
    ]
}

/// Write the header and one row per record.
pub fn write_records<W: Write>(records: &[Vulnerability], writer: W) -> Result<(), WriteError> {
    // fields are quoted up front, the writer must pass them through untouched
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER.map(quoted))?;
    for record in records {
        writer.write_record(row(record))?;
    }

    writer.flush()?;

    Ok(())
}

/// Create (or truncate) a file and write the records to it.
pub fn write_file(records: &[Vulnerability], path: &Path) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(records, file)?;

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    log::info!(
        "Stored {} vulnerabilities as CSV to {} ({})",
        records.len(),
        path.display(),
        absolute.display()
    );

    Ok(())
}
