//! Scripted in-memory transport for unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use super::client::{ClientSettings, HinemosClient, LOGIN_ENDPOINT};
use super::error::HinemosError;
use super::transport::{HttpRequest, HttpResponse, Transport};

pub const TEST_BASE_URL: &str = "https://manager.test/HinemosWeb/api";
pub const TEST_TOKEN: &str = "test-token";

type Handler = Box<dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync>;

struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers `method path` with a fixed status and JSON body. Later routes win.
    pub fn on(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let text = body.to_string();
        self.on_fn(method, path, move |_| HttpResponse {
            status,
            body: text.clone(),
        })
    }

    pub fn on_fn(
        self,
        method: Method,
        path: &str,
        handler: impl Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static,
    ) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .push(Route {
                method,
                path: format!("/{}", path.trim_start_matches('/')),
                handler: Box::new(handler),
            });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        let suffix = format!("/{}", path.trim_start_matches('/'));
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.url.ends_with(&suffix))
            .collect()
    }

    pub fn login_count(&self) -> usize {
        self.calls_to(Method::POST, LOGIN_ENDPOINT).len()
    }

    pub fn total_calls(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HinemosError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let routes = self.routes.lock().expect("routes lock");
        if let Some(route) = routes
            .iter()
            .rev()
            .find(|route| route.method == request.method && request.url.ends_with(&route.path))
        {
            return Ok((route.handler)(&request));
        }

        if request.method == Method::POST && request.url.ends_with(LOGIN_ENDPOINT) {
            return Ok(HttpResponse {
                status: 200,
                body: json!({
                    "token": {"tokenId": TEST_TOKEN, "validTermMinites": 10},
                    "managerInfo": {"version": "7.0.0"}
                })
                .to_string(),
            });
        }

        Ok(HttpResponse {
            status: 404,
            body: json!({"message": format!("no mock route for {}", request.url)}).to_string(),
        })
    }
}

pub fn test_settings() -> ClientSettings {
    ClientSettings {
        base_url: TEST_BASE_URL.to_string(),
        username: "hinemos".to_string(),
        password: "hinemos-password".to_string(),
        verify_ssl: true,
        timeout: Duration::from_secs(30),
    }
}

pub fn client_with(transport: &Arc<MockTransport>) -> HinemosClient {
    HinemosClient::new(Arc::new(test_settings()), transport.clone())
}

/// Response that echoes the submitted JSON body back with status 200.
pub fn echo(request: &HttpRequest) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: request
            .body
            .clone()
            .unwrap_or_else(|| json!({}))
            .to_string(),
    }
}
