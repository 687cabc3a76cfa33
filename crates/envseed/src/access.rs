//! Typed read-back of environment values.
//!
//! Responsibilities:
//! - Look up keys in a store with a default-or-error policy.
//! - Apply a caller-supplied conversion to present values.
//!
//! Does NOT handle:
//! - Writing values (see loader.rs).
//!
//! Invariants:
//! - Defaults are returned as given, never passed through the conversion.
//! - Conversion failures always surface; nothing is swallowed.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::EnvError;
use crate::store::EnvStore;

/// Look up `key`, failing when it is absent.
///
/// The stored text is returned unchanged; this is the identity end of the
/// conversion spectrum.
///
/// # Errors
///
/// Returns [`EnvError::KeyNotFound`] when the store has no value for `key`.
pub fn get<S: EnvStore + ?Sized>(store: &S, key: &str) -> Result<String, EnvError> {
    store
        .get(key)
        .ok_or_else(|| EnvError::KeyNotFound(key.to_string()))
}

/// Look up `key`, returning `default` when absent.
pub fn get_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: impl Into<String>) -> String {
    store.get(key).unwrap_or_else(|| default.into())
}

/// Look up `key` and convert the stored text with `into`.
///
/// # Errors
///
/// Returns [`EnvError::KeyNotFound`] when absent and [`EnvError::Conversion`]
/// when `into` rejects the stored text.
pub fn get_with<S, T, E, F>(store: &S, key: &str, into: F) -> Result<T, EnvError>
where
    S: EnvStore + ?Sized,
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    let raw = get(store, key)?;
    convert(key, &raw, into)
}

/// Look up `key` and convert, returning `default` untouched when absent.
///
/// The default bypasses `into`; a present value still converts, and its
/// failure still surfaces.
///
/// # Errors
///
/// Returns [`EnvError::Conversion`] when `into` rejects a present value.
pub fn get_with_or<S, T, E, F>(store: &S, key: &str, default: T, into: F) -> Result<T, EnvError>
where
    S: EnvStore + ?Sized,
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    match store.get(key) {
        Some(raw) => convert(key, &raw, into),
        None => Ok(default),
    }
}

/// Look up `key` and parse the stored text via [`FromStr`].
///
/// # Errors
///
/// Returns [`EnvError::KeyNotFound`] when absent and [`EnvError::Conversion`]
/// when parsing fails.
pub fn get_parsed<S, T>(store: &S, key: &str) -> Result<T, EnvError>
where
    S: EnvStore + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    get_with(store, key, str::parse::<T>)
}

/// Look up `key` and parse it, returning `default` untouched when absent.
///
/// # Errors
///
/// Returns [`EnvError::Conversion`] when a present value fails to parse.
pub fn get_parsed_or<S, T>(store: &S, key: &str, default: T) -> Result<T, EnvError>
where
    S: EnvStore + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    get_with_or(store, key, default, str::parse::<T>)
}

fn convert<T, E, F>(key: &str, raw: &str, into: F) -> Result<T, EnvError>
where
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    into(raw).map_err(|e| EnvError::Conversion {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Read a process environment variable, returning `None` if unset, empty,
/// or whitespace-only. Returns the trimmed value (leading/trailing
/// whitespace removed) if present.
pub fn var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return the original
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
