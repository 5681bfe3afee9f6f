//! Generic HTTP request handling
//!
//! Everything between a configured [`RequestBuilder`] and a response body
//! lives here: building the `reqwest` client from a [`ClientConfig`],
//! sending, status classification and JSON decoding.
//!
//! # Status classification
//! - `200`, `201`: success, body returned as-is
//! - `204`: success, empty body
//! - anything else: [`MonascaError::Api`] carrying the status and raw body

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::MonascaError;
use crate::utils::log_sanitizer::{header_for_log, truncate_for_log};

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Build the `reqwest` client for one configuration.
    ///
    /// Timeout, TLS policy and the JSON content headers are fixed here. The
    /// configured extra headers are not client defaults: `reqwest` keeps one
    /// value per default header name, so they are sent per request instead
    /// (see [`HttpUtils::extra_headers`]).
    pub fn build_client(config: &ClientConfig) -> Result<Client, MonascaError> {
        let builder = Client::builder()
            .timeout(config.timeout)
            .default_headers(Self::json_headers());

        let builder = if config.insecure {
            log::warn!(
                "TLS certificate verification disabled for {}; only use this for testing",
                config.base_url
            );
            Self::accept_invalid_certs(builder)
        } else {
            builder
        };

        builder
            .build()
            .map_err(|e| MonascaError::ClientBuild(e.to_string()))
    }

    #[cfg(any(feature = "native-tls", feature = "rustls"))]
    fn accept_invalid_certs(builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        builder.danger_accept_invalid_certs(true)
    }

    #[cfg(not(any(feature = "native-tls", feature = "rustls")))]
    fn accept_invalid_certs(builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        builder
    }

    /// `Content-Type` and `Accept` set to `application/json`.
    pub fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }

    /// Validated extra headers, in configuration order.
    ///
    /// Repeated names keep every value. A value wrapped in square brackets
    /// (`[token]`) is sent without them.
    pub fn extra_headers(config: &ClientConfig) -> Result<HeaderMap, MonascaError> {
        let mut headers = HeaderMap::new();

        for (name, value) in &config.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    MonascaError::InvalidHeader {
                        name: name.clone(),
                        detail: e.to_string(),
                    }
                })?;
            let value = strip_brackets(value);
            let header_value =
                HeaderValue::from_str(value).map_err(|e| MonascaError::InvalidHeader {
                    name: name.clone(),
                    detail: e.to_string(),
                })?;
            log::debug!("Header {name}: {}", header_for_log(name, value));
            headers.append(header_name, header_value);
        }

        Ok(headers)
    }

    /// Append every extra header to one request.
    pub fn apply_headers(mut request: RequestBuilder, headers: &HeaderMap) -> RequestBuilder {
        for (name, value) in headers {
            request = request.header(name.clone(), value.clone());
        }
        request
    }

    /// Performs an HTTP request and returns the response body
    ///
    /// # Returns
    /// * `Ok(body)` for 200/201, `Ok("")` for 204
    /// * `Err(MonascaError::Timeout | Network)` when no response was read
    /// * `Err(MonascaError::Api)` for any other status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, MonascaError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                MonascaError::Timeout(e.to_string())
            } else {
                MonascaError::Network(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                MonascaError::Timeout(e.to_string())
            } else {
                MonascaError::Network(format!("Failed to read response body: {e}"))
            }
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        classify_status(status_code, response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(MonascaError::Decode)` - not JSON, or not the expected shape
    pub fn parse_json<T>(response_text: &str) -> Result<T, MonascaError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            MonascaError::Decode(e.to_string())
        })
    }
}

/// Map a status code and body to the invoker's result.
pub(crate) fn classify_status(status: u16, body: String) -> Result<String, MonascaError> {
    match status {
        200 | 201 => Ok(body),
        204 => Ok(String::new()),
        _ => {
            log::warn!("Monasca API returned HTTP {status}");
            Err(MonascaError::Api { status, body })
        }
    }
}

/// `[value]` -> `value`; anything else is returned unchanged.
fn strip_brackets(value: &str) -> &str {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value)
}
