//! Submission store contract and filesystem implementation.
//!
//! # Responsibility
//! - Append free-text submissions to durable storage under
//!   collision-resistant, human-sortable names.
//! - Surface creation/write failures with a human-readable cause.
//!
//! # Invariants
//! - Validation happens before any filesystem side effect.
//! - Existing records are never overwritten; same-second submissions get
//!   a disambiguating numeric suffix.

use chrono::Local;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Record file name pattern: local wall clock at second resolution,
/// sortable as text within a calendar year layout.
const RECORD_STAMP_FORMAT: &str = "%m_%d_%Y_%H_%M_%S";
const RECORD_EXTENSION: &str = "txt";

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure to persist one submission.
#[derive(Debug)]
pub enum PersistError {
    /// Submission text was empty after trimming; rejected before I/O.
    EmptySubmission,
    /// The storage directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },
    /// The record file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubmission => write!(f, "submission text is empty"),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create submission directory `{}`: {source}",
                path.display()
            ),
            Self::Write { path, source } => write!(
                f,
                "failed to write submission record `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptySubmission => None,
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

/// Use-case contract for durable submission storage.
pub trait SubmissionStore {
    /// Persists trimmed submission text as one new record.
    ///
    /// # Contract
    /// - Whitespace-only text fails with `PersistError::EmptySubmission`
    ///   before any I/O.
    /// - On success exactly one new record exists; its path is returned.
    /// - Failures are not retried.
    fn persist(&self, text: &str) -> PersistResult<PathBuf>;
}

/// Filesystem-backed submission store: one text file per record in a
/// single directory, created on first use.
pub struct FsSubmissionStore {
    dir: PathBuf,
}

impl FsSubmissionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store writes records into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SubmissionStore for FsSubmissionStore {
    fn persist(&self, text: &str) -> PersistResult<PathBuf> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PersistError::EmptySubmission);
        }

        fs::create_dir_all(&self.dir).map_err(|source| PersistError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let stamp = Local::now().format(RECORD_STAMP_FORMAT).to_string();
        let path = unique_record_path(&self.dir, &stamp);
        match fs::write(&path, trimmed) {
            Ok(()) => {
                info!(
                    "event=submission_persist module=repo status=ok path={} bytes={}",
                    path.display(),
                    trimmed.len()
                );
                Ok(path)
            }
            Err(source) => {
                error!(
                    "event=submission_persist module=repo status=error path={} error={}",
                    path.display(),
                    source
                );
                Err(PersistError::Write { path, source })
            }
        }
    }
}

/// Picks the first unused record path for `stamp`: the bare stamp, then
/// `_2`, `_3`, ... for submissions landing within the same second.
fn unique_record_path(dir: &Path, stamp: &str) -> PathBuf {
    let bare = dir.join(format!("{stamp}.{RECORD_EXTENSION}"));
    if !bare.exists() {
        return bare;
    }
    let mut attempt: u32 = 2;
    loop {
        let candidate = dir.join(format!("{stamp}_{attempt}.{RECORD_EXTENSION}"));
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}
