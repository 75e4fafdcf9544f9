//! Delimited-source ingestion pipeline.
//!
//! # Responsibility
//! - Turn arbitrary spreadsheet exports into normalized `TabularDataset`
//!   snapshots.
//! - Keep ingestion total: callers receive a usable dataset on every path.
//!
//! # Invariants
//! - `load_table` never propagates an error past this boundary; any read
//!   failure resolves to the caller-supplied fallback.
//! - Column-specific formatting is opportunistic and never destructive.

pub mod format;
pub mod table_loader;
