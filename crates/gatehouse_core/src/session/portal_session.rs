//! Session state machine and operations.
//!
//! # Responsibility
//! - Gate access behind the shared secret and track the active view.
//! - Cache both datasets for the session lifetime and coordinate the
//!   submission workflow.
//!
//! # Invariants
//! - `active_view` is well-defined at all times, authenticated or not.
//! - Dataset replacement is atomic: readers see the old snapshot or the
//!   new one, never a partial mix.
//! - Notices are returned to the caller and never stored.

use crate::config::PortalConfig;
use crate::ingest::table_loader::load_table;
use crate::model::table::TabularDataset;
use crate::model::view::PortalView;
use crate::repo::submission_repo::{FsSubmissionStore, PersistError, SubmissionStore};
use log::info;
use serde::{Deserialize, Serialize};

/// Key name the boundary layer reports for the commit keystroke.
const COMMIT_KEY: &str = "Enter";

/// Navigation signal consumed immediately by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The unauthenticated entry point.
    Login,
    /// The protected area.
    Home,
}

/// Transient outcome of a side-effecting operation, shown once to the
/// user and then discarded; it is not queryable session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Per-session authority over authentication, view selection, cached
/// datasets and the in-flight submission draft.
///
/// Exactly one instance exists per user session; collaborators are
/// injected rather than reached through globals.
pub struct Session<S: SubmissionStore> {
    config: PortalConfig,
    store: S,
    password: String,
    auth_error: bool,
    is_authenticated: bool,
    active_view: PortalView,
    schedule: TabularDataset,
    members: TabularDataset,
    draft_submission: String,
}

impl Session<FsSubmissionStore> {
    /// Opens a session backed by filesystem submission storage rooted at
    /// the configured directory.
    pub fn open(config: PortalConfig) -> Self {
        let store = FsSubmissionStore::new(config.submissions_dir());
        Self::new(config, store)
    }
}

impl<S: SubmissionStore> Session<S> {
    /// Creates a logged-out session with empty datasets and draft.
    pub fn new(config: PortalConfig, store: S) -> Self {
        Self {
            config,
            store,
            password: String::new(),
            auth_error: false,
            is_authenticated: false,
            active_view: PortalView::default(),
            schedule: TabularDataset::empty(),
            members: TabularDataset::empty(),
            draft_submission: String::new(),
        }
    }

    // ---- Auth ----

    /// Updates the candidate secret.
    ///
    /// Starts a fresh attempt: any pending mismatch warning clears as
    /// soon as the user re-types, regardless of the new value.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        if self.auth_error {
            self.auth_error = false;
        }
    }

    /// Compares the candidate against the configured secret.
    ///
    /// On match, transitions LoggedOut -> LoggedIn and signals a redirect
    /// to the protected area. On mismatch, raises the one-shot mismatch
    /// flag and keeps the candidate so the user can see what they typed.
    pub fn submit_password(&mut self) -> Option<Route> {
        if verify_secret(&self.password, self.config.secret()) {
            self.is_authenticated = true;
            self.auth_error = false;
            info!("event=auth_submit module=session status=ok outcome=match");
            Some(Route::Home)
        } else {
            self.auth_error = true;
            info!("event=auth_submit module=session status=ok outcome=mismatch");
            None
        }
    }

    /// Keyboard path to the commit action: Enter submits the candidate,
    /// every other key is a no-op.
    pub fn handle_keypress(&mut self, key: &str) -> Option<Route> {
        if key == COMMIT_KEY {
            self.submit_password()
        } else {
            None
        }
    }

    /// Guard for entering any protected view: signals a redirect to the
    /// login entry point when unauthenticated, with no other state change.
    pub fn check_access_or_redirect(&self) -> Option<Route> {
        if self.is_authenticated {
            None
        } else {
            Some(Route::Login)
        }
    }

    /// Returns the session to LoggedOut, clearing credentials and the
    /// mismatch flag.
    ///
    /// Policy: `active_view` and loaded datasets are retained so a
    /// re-login within the same process does not re-read the sources.
    pub fn logout(&mut self) -> Route {
        self.is_authenticated = false;
        self.password.clear();
        self.auth_error = false;
        info!("event=logout module=session status=ok");
        Route::Login
    }

    // ---- Views ----

    /// Selects the active table; selection is mutually exclusive by
    /// construction of `PortalView`.
    pub fn toggle_view(&mut self, target: PortalView) {
        self.active_view = target;
    }

    // ---- Datasets ----

    /// Loads both datasets unless already populated.
    ///
    /// Idempotent: a dataset that already has a header row is skipped, so
    /// calling this on every view mount causes no redundant reads within
    /// a session.
    pub fn ensure_data_loaded(&mut self) {
        if !self.schedule.is_loaded() {
            self.schedule = load_table(
                self.config.schedule_path(),
                TabularDataset::schedule_fallback(),
            );
        }
        if !self.members.is_loaded() {
            self.members = load_table(
                self.config.members_path(),
                TabularDataset::members_fallback(),
            );
        }
    }

    // ---- Submissions ----

    /// Replaces the in-flight draft text.
    pub fn set_draft_submission(&mut self, text: impl Into<String>) {
        self.draft_submission = text.into();
    }

    /// Persists the draft as one durable record.
    ///
    /// Blank drafts fail validation before any I/O. On success the draft
    /// is cleared: ownership of the text transfers to durable storage.
    /// The returned notice is consumed once by the boundary layer.
    pub fn submit_draft_submission(&mut self) -> Notice {
        match self.store.persist(&self.draft_submission) {
            Ok(_path) => {
                self.draft_submission.clear();
                Notice::Success("Submission saved.".to_string())
            }
            Err(PersistError::EmptySubmission) => {
                Notice::Error("Please enter a submission.".to_string())
            }
            Err(err) => Notice::Error(format!("Error saving submission: {err}")),
        }
    }

    // ---- Derived reads ----

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn auth_error(&self) -> bool {
        self.auth_error
    }

    pub fn active_view(&self) -> PortalView {
        self.active_view
    }

    pub fn schedule(&self) -> &TabularDataset {
        &self.schedule
    }

    pub fn members(&self) -> &TabularDataset {
        &self.members
    }

    pub fn draft_submission(&self) -> &str {
        &self.draft_submission
    }

    /// Number of rows in the member directory, shown next to the view
    /// toggle.
    pub fn members_count(&self) -> usize {
        self.members.row_count()
    }
}

/// Single seam for secret comparison policy.
///
/// Currently exact, case-sensitive string equality; changing the policy
/// (case folding, hashing) must not touch session-flow logic.
fn verify_secret(candidate: &str, secret: &str) -> bool {
    candidate == secret
}
