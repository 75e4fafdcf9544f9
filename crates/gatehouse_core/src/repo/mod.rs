//! Durable storage for free-text submissions.
//!
//! # Responsibility
//! - Define the use-case contract for persisting submissions.
//! - Isolate filesystem details from session orchestration.
//!
//! # Invariants
//! - Empty submissions are rejected before any I/O.
//! - Each successful persist produces exactly one new record.

pub mod submission_repo;
