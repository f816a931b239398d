/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable
///
/// Unset and blank variables yield `None`. A value that does not parse is
/// logged and ignored.
pub fn env_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: cannot parse {:?}", name, raw);
            None
        }
    }
}

/// [`env_var`] with a fallback
pub fn env_var_or<T: FromStr>(name: &str, default: T) -> T {
    env_var(name).unwrap_or(default)
}
