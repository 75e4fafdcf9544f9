//! Domain model for the portal core.
//!
//! # Responsibility
//! - Define the normalized table shape shared by ingestion and session state.
//! - Define the view selector exposed to the presentation layer.
//!
//! # Invariants
//! - Every `TabularDataset` row has exactly as many cells as there are headers.
//! - Absence is always the empty string, never a placeholder word.

pub mod table;
pub mod view;
