//! Centralized constants for the envseed crate.

/// Default dotenv file name, resolved against the current working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable that disables [`load_dotenv`](crate::load_dotenv)
/// when set to `"1"` or `"true"`.
pub const ENVSEED_DISABLED_VAR: &str = "ENVSEED_DISABLED";
