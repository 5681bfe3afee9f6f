//! Process-wide default configuration.
//!
//! For callers that want package-level setters instead of passing a
//! [`ClientConfig`] around. The defaults sit behind an `RwLock`; each
//! [`client`] call snapshots them, so changing a default never affects a
//! client that was already built.

use std::sync::{LazyLock, PoisonError, RwLock, RwLockWriteGuard};
use std::time::Duration;

use crate::client::MonascaClient;
use crate::config::ClientConfig;
use crate::error::Result;

static DEFAULT_CONFIG: LazyLock<RwLock<ClientConfig>> =
    LazyLock::new(|| RwLock::new(ClientConfig::default()));

fn write() -> RwLockWriteGuard<'static, ClientConfig> {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Copy of the current defaults.
pub fn config() -> ClientConfig {
    DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace all defaults at once.
pub fn set_config(config: ClientConfig) {
    *write() = config;
}

pub fn set_base_url(base_url: impl Into<String>) {
    write().set_base_url(base_url);
}

pub fn set_timeout(timeout: Duration) {
    write().set_timeout(timeout);
}

/// Disable TLS certificate verification for clients built afterwards.
/// Only meant for test environments.
pub fn set_insecure(insecure: bool) {
    write().set_insecure(insecure);
}

pub fn set_headers(headers: Vec<(String, String)>) {
    write().set_headers(headers);
}

pub fn add_header(name: impl Into<String>, value: impl Into<String>) {
    write().add_header(name, value);
}

/// Restore the built-in defaults.
pub fn reset() {
    set_config(ClientConfig::default());
}

/// Build a client from the current defaults.
pub fn client() -> Result<MonascaClient> {
    MonascaClient::new(config())
}
