//! Dotenv loading into an environment store.
//!
//! Responsibilities:
//! - Stream a dotenv source line by line and apply entries to a store.
//! - Enforce the overwrite policy and count what was applied or skipped.
//! - Provide the `load_dotenv` default entry point with its disable gate.
//!
//! Does NOT handle:
//! - Line grammar (see parser.rs).
//! - Reading values back out (see access.rs).
//!
//! Invariants:
//! - With overwrite off, a key counts as taken only when its stored value
//!   is non-empty; an empty value is overwritten like an absent one.
//! - Within one source, a later duplicate key wins over an earlier one.
//! - The file handle opened by `load` is closed exactly once on every exit
//!   path; log lines carry line numbers, never line contents.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::constants::{DEFAULT_ENV_FILE, ENVSEED_DISABLED_VAR};
use crate::error::EnvError;
use crate::parser::{LineKind, parse_line};
use crate::store::{EnvStore, ProcessEnv};

/// Counters describing one load pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries written to the store.
    pub applied: usize,
    /// Entries skipped because the key was already set and overwrite was
    /// off.
    pub skipped_existing: usize,
    /// Lines skipped because they had no `=` or an empty key.
    pub skipped_malformed: usize,
}

/// Builder for a dotenv load pass.
///
/// Defaults to `.env` in the current working directory with overwrite
/// enabled. The loader runs a single blocking read to completion; there is
/// no retry.
pub struct Loader {
    path: PathBuf,
    overwrite: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Create a loader with default settings.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_FILE),
            overwrite: true,
        }
    }

    /// Set the file to load instead of `.env`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set whether parsed entries replace values already present in the
    /// store. Defaults to `true`.
    ///
    /// When disabled, a key whose stored value is the empty string is
    /// treated as absent and still gets written.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Open the configured file and apply its entries to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Open`] when the file cannot be opened and
    /// [`EnvError::Read`] when reading fails mid-stream.
    pub fn load<S: EnvStore + ?Sized>(&self, store: &mut S) -> Result<LoadReport, EnvError> {
        let file = File::open(&self.path).map_err(|e| EnvError::Open {
            path: self.path.clone(),
            kind: e.kind(),
        })?;
        self.load_from_reader(BufReader::new(file), store)
    }

    /// Apply entries from an already-open source to `store`.
    ///
    /// The reader is consumed and dropped on return, success or error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Read`] when a line cannot be read.
    pub fn load_from_reader<R, S>(&self, reader: R, store: &mut S) -> Result<LoadReport, EnvError>
    where
        R: BufRead,
        S: EnvStore + ?Sized,
    {
        let mut report = LoadReport::default();
        for (index, line) in reader.lines().enumerate() {
            let raw = line.map_err(|e| EnvError::Read {
                line: index + 1,
                kind: e.kind(),
            })?;
            match parse_line(&raw) {
                LineKind::Blank | LineKind::Comment => {}
                LineKind::Malformed => {
                    tracing::warn!(line = index + 1, "skipping malformed env line");
                    report.skipped_malformed += 1;
                }
                LineKind::Entry { key, value } => {
                    if !self.overwrite && store.get(&key).is_some_and(|v| !v.is_empty()) {
                        report.skipped_existing += 1;
                        continue;
                    }
                    store.set(&key, &value);
                    report.applied += 1;
                }
            }
        }
        tracing::debug!(
            applied = report.applied,
            skipped_existing = report.skipped_existing,
            skipped_malformed = report.skipped_malformed,
            "env load pass finished"
        );
        Ok(report)
    }
}

/// Check if loading is disabled via [`ENVSEED_DISABLED_VAR`].
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENVSEED_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `.env` from the current directory into the process environment.
///
/// A missing `.env` file is a no-op success; any other open or read failure
/// is reported. If `ENVSEED_DISABLED` is set to `"1"` or `"true"`, loading
/// is skipped entirely, which keeps test harnesses free of ambient `.env`
/// pickup.
///
/// Callers that want fail-fast behavior propagate the result with `?`;
/// callers that prefer to inspect the failure keep the returned value.
///
/// # Errors
///
/// Returns [`EnvError::Open`] or [`EnvError::Read`] for failures other than
/// a missing file.
pub fn load_dotenv() -> Result<LoadReport, EnvError> {
    if dotenv_disabled() {
        return Ok(LoadReport::default());
    }
    match Loader::new().load(&mut ProcessEnv) {
        Err(EnvError::Open { kind, .. }) if kind == std::io::ErrorKind::NotFound => {
            Ok(LoadReport::default())
        }
        other => other,
    }
}
