//! Axum handlers for the HTTP binding.
//!
//! `/tools` and `/resources` are a plain REST view over the tool and resource
//! tables; `/mcp` speaks JSON-RPC through the same engine as stdio.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::domain::{
    resources::{read_resource, resolve_resource, RESOURCES},
    tools::{build_tools_list, error_text, is_known_tool, run_tool},
};
use crate::errors::AppError;
use crate::hinemos::models::GetNodeListRequest;
use crate::mcp::rpc::json_rpc_error;
use crate::mcp::server::handle_json_rpc_payload;
use crate::AppState;

pub const ENDPOINTS: [&str; 6] = [
    "/health",
    "/tools",
    "/tools/{tool_name}",
    "/resources",
    "/resources/{resource_name}",
    "/mcp",
];

#[derive(Debug, Serialize)]
pub struct ServerInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub transport: &'static str,
    pub hinemos_url: String,
    pub available_endpoints: [&'static str; 6],
}

#[derive(Debug, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub description: Option<String>,
    pub endpoint: String,
    pub input_schema: Value,
}

#[derive(Debug, Serialize)]
pub struct ResourceEntry {
    pub name: &'static str,
    pub uri: &'static str,
    pub description: &'static str,
    pub endpoint: String,
}

pub async fn server_info(State(state): State<AppState>) -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        transport: "HTTP",
        hinemos_url: state.settings.base_url.clone(),
        available_endpoints: ENDPOINTS,
    })
}

/// Healthy only when the manager answers a node listing.
pub async fn health(State(state): State<AppState>) -> Response {
    let client = state.session();
    match client
        .repository()
        .list_nodes(&GetNodeListRequest::under(None))
        .await
    {
        Ok(_) => Json(json!({
            "status": "healthy",
            "hinemos_connection": "ok",
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }))
        .into_response(),
        Err(err) => {
            warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "error": format!("Hinemos connection failed: {err}"),
                })),
            )
                .into_response()
        }
    }
}

pub async fn list_tools() -> Json<Value> {
    let tools: Vec<ToolEntry> = build_tools_list()
        .into_iter()
        .map(|tool| ToolEntry {
            endpoint: format!("/tools/{}", tool.name),
            input_schema: serde_json::to_value(&tool.input_schema).unwrap_or(Value::Null),
            description: tool.description,
            name: tool.name,
        })
        .collect();
    Json(json!({ "tools": tools }))
}

pub async fn call_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    if !is_known_tool(&tool_name) {
        return Err(AppError::not_found(
            "tool_not_found",
            format!("Tool '{tool_name}' not found"),
        ));
    }

    let arguments = if body.iter().all(u8::is_ascii_whitespace) {
        json!({})
    } else {
        serde_json::from_slice::<Value>(&body).map_err(|err| {
            AppError::bad_request("invalid_json", format!("request body is not valid JSON: {err}"))
        })?
    };

    let body = match run_tool(&state, &tool_name, arguments).await {
        Ok(result) => json!({
            "tool": tool_name,
            "status": "success",
            "result": result,
        }),
        Err(err) => json!({
            "tool": tool_name,
            "status": "error",
            "error": error_text(&err),
        }),
    };
    Ok(Json(body))
}

pub async fn list_resources() -> Json<Value> {
    let resources: Vec<ResourceEntry> = RESOURCES
        .iter()
        .map(|&(name, uri, _, description)| ResourceEntry {
            name,
            uri,
            description,
            endpoint: format!("/resources/{name}"),
        })
        .collect();
    Json(json!({ "resources": resources }))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(resource_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    if resolve_resource(&resource_name).is_none() {
        return Err(AppError::not_found(
            "resource_not_found",
            format!("Resource '{resource_name}' not found"),
        ));
    }

    let content = read_resource(&state, &resource_name).await?;
    Ok(Json(json!({
        "resource": resource_name,
        "status": "success",
        "content": content,
    })))
}

pub async fn mcp_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return (
                StatusCode::OK,
                Json(json_rpc_error(None, -32700, "Parse error")),
            )
                .into_response()
        }
    };

    match handle_json_rpc_payload(&state, payload).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
