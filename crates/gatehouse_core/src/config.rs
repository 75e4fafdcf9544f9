//! Portal configuration.
//!
//! # Responsibility
//! - Carry the single shared secret and the storage locations the core
//!   reads from and writes to.
//!
//! # Invariants
//! - Exactly one secret per portal; no environment-driven override lives
//!   in core.

use std::path::{Path, PathBuf};

/// Static configuration for one portal instance.
///
/// The secret is deliberately a plain exact-match string: the whole
/// security model is one shared gate keyword. Comparison policy lives
/// behind `session`'s verification seam, not here.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    secret: String,
    schedule_path: PathBuf,
    members_path: PathBuf,
    submissions_dir: PathBuf,
}

impl PortalConfig {
    pub fn new(
        secret: impl Into<String>,
        schedule_path: impl Into<PathBuf>,
        members_path: impl Into<PathBuf>,
        submissions_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            secret: secret.into(),
            schedule_path: schedule_path.into(),
            members_path: members_path.into(),
            submissions_dir: submissions_dir.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn schedule_path(&self) -> &Path {
        &self.schedule_path
    }

    pub fn members_path(&self) -> &Path {
        &self.members_path
    }

    pub fn submissions_dir(&self) -> &Path {
        &self.submissions_dir
    }
}
