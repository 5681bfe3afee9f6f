//! Client configuration.

use std::env;
use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8070";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header that carries a Keystone token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Settings a [`MonascaClient`](crate::MonascaClient) is built from.
///
/// A client copies its configuration at construction time; changing a
/// `ClientConfig` afterwards never affects a client that already exists.
///
/// # Default
///
/// `http://localhost:8070`, a 10 second timeout, TLS verification enabled and
/// no extra headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Monasca API endpoint, e.g. `https://monasca.example.com:8070`.
    pub base_url: String,
    /// Wall-clock limit for one request.
    pub timeout: Duration,
    /// Skip TLS certificate verification. Only meant for test environments.
    pub insecure: bool,
    /// Extra headers sent with every request, in order. Names may repeat.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
            headers: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Build a configuration from the environment.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `MONASCA_URL` | base URL |
    /// | `MONASCA_TIMEOUT_SECS` | timeout in whole seconds |
    /// | `MONASCA_INSECURE` | `1`/`true`/`yes` disables TLS verification |
    /// | `MONASCA_AUTH_TOKEN` | sent as `X-Auth-Token` |
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// [`from_env`](Self::from_env) with variables resolved through `lookup`.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("MONASCA_URL") {
            config.base_url = url;
        }
        if let Some(secs) =
            lookup("MONASCA_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(flag) = lookup("MONASCA_INSECURE") {
            config.insecure = parse_flag(&flag);
        }
        if let Some(token) = lookup("MONASCA_AUTH_TOKEN") {
            config.add_header(AUTH_TOKEN_HEADER, token);
        }

        config
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable TLS certificate verification. Only use this against test deployments.
    #[must_use]
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    #[must_use]
    pub fn with_auth_token(self, token: impl Into<String>) -> Self {
        self.with_header(AUTH_TOKEN_HEADER, token)
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_insecure(&mut self, insecure: bool) {
        self.insecure = insecure;
    }

    /// Replace all extra headers.
    pub fn set_headers(&mut self, headers: Vec<(String, String)>) {
        self.headers = headers;
    }

    /// Append one header, keeping any existing values for the same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
