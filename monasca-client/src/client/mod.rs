//! Monasca API client

mod http;

use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http_client::HttpUtils;

/// Client for one Monasca API endpoint.
///
/// The configuration is fixed at construction. Cloning is cheap and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MonascaClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    /// Configured extra headers, validated once and appended to every request.
    pub(crate) extra_headers: HeaderMap,
}

impl MonascaClient {
    /// Build a client from `config`.
    ///
    /// Fails when a header is not valid HTTP or the TLS backend cannot be
    /// initialised. The base URL is checked on every request.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let extra_headers = HttpUtils::extra_headers(&config)?;
        let client = HttpUtils::build_client(&config)?;
        log::debug!(
            "Monasca client for {} (timeout {:?}, insecure {})",
            config.base_url,
            config.timeout,
            config.insecure
        );
        Ok(Self {
            client,
            config,
            extra_headers,
        })
    }

    /// Client with [`ClientConfig::default`] pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Client configured from `MONASCA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
