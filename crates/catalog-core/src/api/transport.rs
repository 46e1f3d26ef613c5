//! HTTP Transport
//!
//! The single operation the client needs from the network: GET a URL and
//! hand back status and body. Browser futures are not `Send`, hence `?Send`.

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase for the status ("Not Found")
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse>;
}

/// reqwest-backed transport (window.fetch on wasm32)
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
