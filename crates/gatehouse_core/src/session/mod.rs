//! Session orchestration layer.
//!
//! # Responsibility
//! - Own the per-session authority over what the current user may see
//!   and do.
//! - Coordinate ingestion and submission storage behind stable session
//!   operations.
//!
//! # Invariants
//! - One `Session` per user interaction sequence; no ambient globals.
//! - States are exactly {LoggedOut, LoggedIn}; error and view flags are
//!   orthogonal to the machine, never extra states.

pub mod portal_session;

pub use portal_session::{Notice, Route, Session};
