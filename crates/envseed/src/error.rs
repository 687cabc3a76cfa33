//! Error types for dotenv loading and environment access.
//!
//! Responsibilities:
//! - Define error variants for loader and accessor failures.
//!
//! Does NOT handle:
//! - Malformed lines (see parser.rs); those are skipped and counted, never
//!   raised.
//!
//! Invariants:
//! - Messages never include raw dotenv line contents, so a broken file
//!   cannot leak secrets into logs. Only paths, line numbers, and
//!   `std::io::ErrorKind`s appear.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the loader and accessor.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The dotenv source could not be opened.
    #[error("failed to open env file at {path}: {kind}")]
    Open { path: PathBuf, kind: ErrorKind },

    /// An I/O failure while reading lines from an open source.
    #[error("failed to read env source at line {line}: {kind}")]
    Read { line: usize, kind: ErrorKind },

    /// Accessor lookup missed and the caller supplied no default.
    #[error("environment variable `{0}` is not set")]
    KeyNotFound(String),

    /// The conversion function rejected the stored value.
    #[error("invalid value for {key}: {message}")]
    Conversion { key: String, message: String },
}
