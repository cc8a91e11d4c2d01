//! Authenticated session against one Hinemos manager.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::error::HinemosError;
use super::models::{LoginRequest, LoginResponse};
use super::monitor::MonitorApi;
use super::repository::RepositoryApi;
use super::transport::{HttpRequest, HttpResponse, Transport};

pub const LOGIN_ENDPOINT: &str = "AccessRestEndpoints/access/login";

const SUB_APIS: [(&str, &str); 3] = [
    ("repository/", "RepositoryRestEndpoints"),
    ("monitorsetting/", "MonitorsettingRestEndpoints"),
    ("monitorresult/", "MonitorResultRestEndpoints"),
];

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.@-]+$").expect("identifier pattern compiles"));

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub verify_ssl: bool,
    pub timeout: Duration,
}

/// One logical session. The bearer token is obtained on first use and reused
/// for the lifetime of the value; create one client per caller session.
pub struct HinemosClient {
    settings: Arc<ClientSettings>,
    transport: Arc<dyn Transport>,
    token: OnceCell<String>,
}

impl HinemosClient {
    pub fn new(settings: Arc<ClientSettings>, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
            token: OnceCell::new(),
        }
    }

    pub fn repository(&self) -> RepositoryApi<'_> {
        RepositoryApi::new(self)
    }

    pub fn monitor(&self) -> MonitorApi<'_> {
        MonitorApi::new(self)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.initialized()
    }

    /// Logs in unless a token is already held.
    pub async fn login(&self) -> Result<(), HinemosError> {
        self.token.get_or_try_init(|| self.fetch_token()).await?;
        Ok(())
    }

    async fn fetch_token(&self) -> Result<String, HinemosError> {
        let body = encode(&LoginRequest {
            user_id: self.settings.username.clone(),
            password: self.settings.password.clone(),
        })?;
        let request = HttpRequest {
            method: Method::POST,
            url: format!("{}/{LOGIN_ENDPOINT}", self.base_url()),
            query: Vec::new(),
            bearer_token: None,
            body: Some(body),
        };

        let response = self.transport.send(request).await?;
        if !is_success(response.status) {
            warn!(status = response.status, "hinemos login rejected");
            return Err(match HinemosError::from_response(response.status, &response.body) {
                HinemosError::Api {
                    status,
                    message,
                    body,
                } => HinemosError::Api {
                    status,
                    message: format!("login failed: {message}"),
                    body,
                },
                other => other,
            });
        }

        let login: LoginResponse =
            serde_json::from_str(&response.body).map_err(HinemosError::invalid_response)?;
        info!(
            user = %self.settings.username,
            manager_version = login
                .manager_info
                .as_ref()
                .and_then(|manager| manager.version.as_deref())
                .unwrap_or("unknown"),
            "hinemos login succeeded"
        );
        Ok(login.token.token_id)
    }

    fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    /// Resolves a logical endpoint such as `repository/node` to its sub-API URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        match SUB_APIS
            .iter()
            .find(|(prefix, _)| endpoint.starts_with(prefix))
        {
            Some((_, sub_api)) => format!("{}/{sub_api}/{endpoint}", self.base_url()),
            None => format!("{}/{endpoint}", self.base_url()),
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, HinemosError> {
        decode(self.execute(Method::GET, endpoint, query, None).await?)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, HinemosError> {
        let body = encode(body)?;
        decode(self.execute(Method::POST, endpoint, &[], Some(body)).await?)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, HinemosError> {
        let body = encode(body)?;
        decode(self.execute(Method::PUT, endpoint, &[], Some(body)).await?)
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, HinemosError> {
        decode(self.execute(Method::DELETE, endpoint, query, None).await?)
    }

    /// DELETE carrying a JSON body, for endpoints that take the ID list there.
    pub async fn delete_with_body<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, HinemosError> {
        let body = encode(body)?;
        decode(self.execute(Method::DELETE, endpoint, &[], Some(body)).await?)
    }

    /// Sends one authenticated request and returns the decoded JSON body.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, HinemosError> {
        self.login().await?;

        let request = HttpRequest {
            method: method.clone(),
            url: self.endpoint_url(endpoint),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            bearer_token: self.token.get().cloned(),
            body,
        };
        debug!(method = %method, url = %request.url, "hinemos request");

        let response = self.transport.send(request).await?;
        parse_response(&method, endpoint, response)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_response(
    method: &Method,
    endpoint: &str,
    response: HttpResponse,
) -> Result<Value, HinemosError> {
    if response.status == 204 {
        return Ok(json!({}));
    }

    if !is_success(response.status) {
        let err = HinemosError::from_response(response.status, &response.body);
        warn!(
            method = %method,
            endpoint,
            status = response.status,
            error = %err,
            "hinemos request failed"
        );
        return Err(err);
    }

    if response.body.trim().is_empty() {
        return Ok(json!({}));
    }

    serde_json::from_str(&response.body).map_err(HinemosError::invalid_response)
}

fn encode(body: &impl Serialize) -> Result<Value, HinemosError> {
    serde_json::to_value(body)
        .map_err(|err| HinemosError::validation(format!("failed to encode request: {err}")))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, HinemosError> {
    serde_json::from_value(value).map_err(HinemosError::invalid_response)
}

/// Checks an identifier before it is placed in a URL path or payload.
pub fn validate_id<'a>(field: &str, value: &'a str) -> Result<&'a str, HinemosError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HinemosError::validation(format!("'{field}' must not be empty")));
    }

    if !ID_PATTERN.is_match(trimmed) {
        return Err(HinemosError::validation(format!(
            "'{field}' contains unsupported characters: {value}"
        )));
    }

    Ok(trimmed)
}
