//! Normalized tabular dataset.
//!
//! # Responsibility
//! - Hold a render-ready (headers, rows) snapshot with string-typed cells.
//! - Enforce the row-width invariant at construction time.
//!
//! # Invariants
//! - `rows[i].len() == headers.len()` for every row.
//! - Datasets are replaced wholesale, never patched in place.

use serde::{Deserialize, Serialize};

/// In-memory table with order-significant headers and all-string cells.
///
/// Downstream rendering never special-cases absence: a missing cell is an
/// empty string by the time it reaches this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDataset {
    /// Column names in source order.
    pub headers: Vec<String>,
    /// Row cells, each row exactly `headers.len()` wide.
    pub rows: Vec<Vec<String>>,
}

impl TabularDataset {
    /// Builds a dataset, padding short rows with empty strings and
    /// truncating long rows to header width.
    ///
    /// # Invariants
    /// - The returned value always satisfies the row-width invariant,
    ///   regardless of the shape of `rows`.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Dataset with no headers and no rows, the pre-load placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether this dataset has been populated at least once.
    ///
    /// A header row with zero data rows still counts as loaded; only the
    /// pre-load placeholder reports `false`.
    pub fn is_loaded(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Substitute schedule shown when the schedule source cannot be read.
    ///
    /// Carries a visible marker row so operators notice the degraded state
    /// instead of mistaking the fallback for real data.
    pub fn schedule_fallback() -> Self {
        Self::new(
            vec!["Date".to_string(), "Event".to_string()],
            vec![
                vec!["09/12/2025".to_string(), "Opening Gathering".to_string()],
                vec!["09/19/2025".to_string(), "Discussion".to_string()],
                vec![
                    "Error".to_string(),
                    "Could not load schedule source - using fallback data".to_string(),
                ],
            ],
        )
    }

    /// Substitute member directory shown when the member source cannot be
    /// read: the expected columns with zero rows.
    pub fn members_fallback() -> Self {
        Self::new(vec!["Name".to_string(), "Role".to_string()], Vec::new())
    }
}
