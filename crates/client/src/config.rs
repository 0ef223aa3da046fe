//! Environment configuration for the relay client.

use crate::{RelayClientError, Result};
use std::env;

/// Environment variable holding the hex-encoded signing key.
pub const SIGNING_KEY_VAR: &str = "RELAY_SIGNING_KEY";
/// Environment variable selecting a known network by label.
pub const NETWORK_VAR: &str = "RELAY_NETWORK";
/// Environment variable overriding the relay endpoint directly.
pub const URL_VAR: &str = "RELAY_URL";

/// Load a required variable from the environment.
pub(crate) fn load_required(key: &'static str) -> Result<String> {
    env::var(key).map_err(|_| RelayClientError::MissingCredential(key))
}

/// Load an optional variable from the environment.
pub(crate) fn load_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}
