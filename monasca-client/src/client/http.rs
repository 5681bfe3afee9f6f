//! Monasca HTTP request methods

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{MonascaError, Result};
use crate::http_client::HttpUtils;
use crate::query::QueryParams;
use crate::url_builder::build_url;
use crate::utils::log_sanitizer::truncate_for_log;

use super::MonascaClient;

impl MonascaClient {
    // ==================== Helpers ====================

    /// Serialize a request body to JSON text.
    fn encode_body<B: Serialize>(body: &B) -> Result<String> {
        let payload =
            serde_json::to_string(body).map_err(|e| MonascaError::Serialization(e.to_string()))?;
        log::debug!("Request Body: {}", truncate_for_log(&payload));
        Ok(payload)
    }

    /// Build the URL, send the request and return the raw body.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<String>,
    ) -> Result<String> {
        let url = build_url(&self.config.base_url, path, params)?;

        let mut request = HttpUtils::apply_headers(
            self.client.request(method.clone(), &url),
            &self.extra_headers,
        );
        if let Some(payload) = body {
            request = request.body(payload);
        }

        HttpUtils::execute_request(request, method.as_str(), &url).await
    }

    // ==================== Verbs ====================

    /// GET and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<T> {
        let response_text = self.send(Method::GET, path, params, None).await?;
        HttpUtils::parse_json(&response_text)
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Self::encode_body(body)?;
        let response_text = self
            .send(Method::POST, path, &QueryParams::new(), Some(payload))
            .await?;
        HttpUtils::parse_json(&response_text)
    }

    /// POST whose success response carries no body.
    pub(crate) async fn post_no_content<B: Serialize>(
        &self,
        path: &str,
        params: &QueryParams,
        body: &B,
    ) -> Result<()> {
        let payload = Self::encode_body(body)?;
        self.send(Method::POST, path, params, Some(payload))
            .await
            .map(|_| ())
    }

    /// PUT a JSON body and decode the JSON response.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Self::encode_body(body)?;
        let response_text = self
            .send(Method::PUT, path, &QueryParams::new(), Some(payload))
            .await?;
        HttpUtils::parse_json(&response_text)
    }

    /// PATCH a JSON body and decode the JSON response.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = Self::encode_body(body)?;
        let response_text = self
            .send(Method::PATCH, path, &QueryParams::new(), Some(payload))
            .await?;
        HttpUtils::parse_json(&response_text)
    }

    /// DELETE; any success status counts, the body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &QueryParams::new(), None)
            .await
            .map(|_| ())
    }
}
