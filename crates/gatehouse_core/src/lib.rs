//! Core domain logic for Gatehouse, a gated information portal.
//! This crate is the single source of truth for portal invariants.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod repo;
pub mod session;

pub use config::PortalConfig;
pub use ingest::format::format_phone_number;
pub use ingest::table_loader::load_table;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::table::TabularDataset;
pub use model::view::PortalView;
pub use repo::submission_repo::{
    FsSubmissionStore, PersistError, PersistResult, SubmissionStore,
};
pub use session::{Notice, Route, Session};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
