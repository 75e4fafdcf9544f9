//! View selector for the protected area.

use serde::{Deserialize, Serialize};

/// Which table the protected area currently shows.
///
/// Selection is mutually exclusive: exactly one view is active at any
/// time, before and after authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalView {
    /// Event schedule table. The initial view.
    Schedule,
    /// Member directory table.
    Members,
}

impl Default for PortalView {
    fn default() -> Self {
        Self::Schedule
    }
}
