//! Seed process environment variables from dotenv files and read them back
//! with typed conversion.
//!
//! The loader and accessor operate on an [`EnvStore`] seam: the real process
//! environment ([`ProcessEnv`]) is one backing, an in-memory map
//! ([`MemoryEnv`]) is another, so tests can run deterministically without
//! process-global mutation.
//!
//! ```
//! use envseed::{Loader, MemoryEnv, get_parsed};
//!
//! let mut env = MemoryEnv::new();
//! Loader::new().load_from_reader("PORT=8080".as_bytes(), &mut env)?;
//! let port: u16 = get_parsed(&env, "PORT")?;
//! assert_eq!(port, 8080);
//! # Ok::<(), envseed::EnvError>(())
//! ```
//!
//! Loading is designed to run once, early, before any threads are spawned;
//! [`ProcessEnv`] relies on that discipline.

mod access;
pub mod constants;
mod error;
mod loader;
mod parser;
mod store;

pub use access::{get, get_or, get_parsed, get_parsed_or, get_with, get_with_or, var_or_none};
pub use error::EnvError;
pub use loader::{LoadReport, Loader, load_dotenv};
pub use parser::parse_str;
pub use store::{EnvStore, MemoryEnv, ProcessEnv};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
