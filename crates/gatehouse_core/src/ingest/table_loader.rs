//! Total CSV-to-table loader.
//!
//! # Responsibility
//! - Read a delimited text source with a header row into a
//!   `TabularDataset`.
//! - Degrade gracefully: a source that cannot be read yields the caller's
//!   fallback, never an error.
//!
//! # Invariants
//! - Every returned row has exactly header width (short rows padded,
//!   long rows truncated).
//! - Not-a-value markers and absent cells become the empty string.
//! - Callers only ever observe a complete snapshot; partial reads are
//!   never exposed.

use crate::ingest::format::format_phone_number;
use crate::model::table::TabularDataset;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Header name that opts a column into phone canonicalization.
const CONTACT_COLUMN: &str = "Contact";

/// Internal read failure, resolved to the fallback before the module
/// boundary. Callers never see this type.
#[derive(Debug)]
enum LoadError {
    Csv(csv::Error),
    MissingHeaderRow,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{err}"),
            Self::MissingHeaderRow => write!(f, "source has no header row"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::MissingHeaderRow => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Loads a delimited source into a normalized dataset.
///
/// Total over its inputs: on any failure (missing file, unreadable
/// encoding, malformed structure) the condition is logged and the
/// caller-supplied `fallback` is returned unchanged. A source with a
/// header row and zero data rows is a successful, valid load.
///
/// # Side effects
/// - Emits `table_load` logging events with row/column counts.
pub fn load_table(path: impl AsRef<Path>, fallback: TabularDataset) -> TabularDataset {
    let path = path.as_ref();
    match read_table(path) {
        Ok(dataset) => {
            info!(
                "event=table_load module=ingest status=ok source={} rows={} columns={} headers={:?}",
                path.display(),
                dataset.row_count(),
                dataset.headers.len(),
                dataset.headers
            );
            dataset
        }
        Err(err) => {
            warn!(
                "event=table_load module=ingest status=error source={} error={} fallback_rows={}",
                path.display(),
                err,
                fallback.row_count()
            );
            fallback
        }
    }
}

fn read_table(path: &Path) -> Result<TabularDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(LoadError::MissingHeaderRow);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(normalize_cell).collect());
    }

    let mut dataset = TabularDataset::new(headers, rows);
    apply_contact_formatting(&mut dataset);
    Ok(dataset)
}

/// Coerces one raw cell: whitespace-only cells and recognized
/// not-a-value markers (the `nan` family emitted by spreadsheet
/// tooling) become the empty string.
fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    trimmed.to_string()
}

/// Canonicalizes the `Contact` column in place when present.
///
/// Absence of the column is not an error; no other column name is
/// semantically special.
fn apply_contact_formatting(dataset: &mut TabularDataset) {
    let Some(contact_index) = dataset
        .headers
        .iter()
        .position(|header| header == CONTACT_COLUMN)
    else {
        return;
    };

    for row in &mut dataset.rows {
        if !row[contact_index].is_empty() {
            row[contact_index] = format_phone_number(&row[contact_index]);
        }
    }
}
