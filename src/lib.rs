use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod hinemos;
pub mod http;
pub mod logging;
pub mod mcp;

use hinemos::{ClientSettings, HinemosClient, Transport};

#[derive(Clone)]
pub struct AppState {
    pub api_token: Option<Arc<str>>,
    pub settings: Arc<ClientSettings>,
    pub transport: Arc<dyn Transport>,
}

impl AppState {
    pub fn new(
        api_token: Option<String>,
        settings: ClientSettings,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            api_token: api_token.map(Arc::<str>::from),
            settings: Arc::new(settings),
            transport,
        }
    }

    /// Fresh manager session for one request or tool call.
    pub fn session(&self) -> HinemosClient {
        HinemosClient::new(self.settings.clone(), self.transport.clone())
    }
}

pub fn build_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/tools", get(http::handlers::list_tools))
        .route("/tools/{tool_name}", post(http::handlers::call_tool))
        .route("/resources", get(http::handlers::list_resources))
        .route(
            "/resources/{resource_name}",
            get(http::handlers::get_resource),
        )
        .route("/mcp", post(http::handlers::mcp_endpoint))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ));

    Router::new()
        .route("/", get(http::handlers::server_info))
        .route("/health", get(http::handlers::health))
        .merge(protected)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
