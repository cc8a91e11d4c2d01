use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Method};
use serde_json::Value;

use super::error::HinemosError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer_token: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one HTTP exchange to the manager. Network failures map to
/// [`HinemosError::Transport`]; any received status is returned as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HinemosError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(verify_ssl: bool, timeout: Duration) -> Result<Self, HinemosError> {
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if !verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| HinemosError::transport(format!("failed to build http client: {err}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HinemosError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = request.bearer_token.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_timeout() {
                HinemosError::transport(format!("timed out: {err}"))
            } else {
                HinemosError::transport(err.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| HinemosError::transport(format!("failed to read response body: {err}")))?;

        Ok(HttpResponse { status, body })
    }
}
