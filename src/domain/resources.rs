//! Read-only snapshots of the manager exposed under `hinemos://` URIs.

use rust_mcp_sdk::schema::{
    ReadResourceContent, ReadResourceRequestParams, ReadResourceResult, Resource,
    TextResourceContents,
};
use serde_json::{json, Value};

use crate::domain::summaries::{MonitorSummary, NodeDetail, ScopeSummary};
use crate::hinemos::{models::GetNodeListRequest, repository::ALL_USERS_ROLE, HinemosClient};
use crate::mcp::rpc::{
    app_error_to_json_rpc, json_rpc_error, json_rpc_error_with_data, json_rpc_result,
};
use crate::{errors::AppError, AppState};

pub const NODES_RESOURCE_URI: &str = "hinemos://repository/nodes";
pub const SCOPES_RESOURCE_URI: &str = "hinemos://repository/scopes";
pub const FACILITY_TREE_RESOURCE_URI: &str = "hinemos://repository/facility_tree";
pub const MONITOR_SETTINGS_RESOURCE_URI: &str = "hinemos://monitor/settings";

/// `(short name, uri, title, description)` for every resource.
pub const RESOURCES: [(&str, &str, &str, &str); 4] = [
    (
        "nodes",
        NODES_RESOURCE_URI,
        "Hinemos Nodes",
        "List of all nodes in the Hinemos repository",
    ),
    (
        "scopes",
        SCOPES_RESOURCE_URI,
        "Hinemos Scopes",
        "List of all scopes in the Hinemos repository",
    ),
    (
        "facility_tree",
        FACILITY_TREE_RESOURCE_URI,
        "Hinemos Facility Tree",
        "Complete facility tree showing all nodes, scopes and their relationships",
    ),
    (
        "monitor_settings",
        MONITOR_SETTINGS_RESOURCE_URI,
        "Hinemos Monitor Settings",
        "List of all monitor configurations",
    ),
];

pub fn build_resources_list() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|(_, uri, title, description)| Resource {
            annotations: None,
            description: Some(description.to_string()),
            icons: vec![],
            meta: None,
            mime_type: Some("application/json".to_string()),
            name: title.to_string(),
            size: None,
            title: None,
            uri: uri.to_string(),
        })
        .collect()
}

/// Resolves a short name or a full URI to the canonical URI.
pub fn resolve_resource(name: &str) -> Option<&'static str> {
    RESOURCES
        .iter()
        .find(|(short, uri, _, _)| *short == name || *uri == name)
        .map(|(_, uri, _, _)| *uri)
}

/// Reads a resource by short name or URI.
pub async fn read_resource(state: &AppState, name: &str) -> Result<Value, AppError> {
    let Some(uri) = resolve_resource(name) else {
        return Err(AppError::not_found(
            "resource_not_found",
            format!("Resource '{name}' not found"),
        ));
    };

    let client = state.session();
    match uri {
        NODES_RESOURCE_URI => read_nodes(&client).await,
        SCOPES_RESOURCE_URI => read_scopes(&client).await,
        FACILITY_TREE_RESOURCE_URI => read_facility_tree(&client).await,
        _ => read_monitor_settings(&client).await,
    }
}

async fn read_nodes(client: &HinemosClient) -> Result<Value, AppError> {
    let nodes = client
        .repository()
        .list_nodes(&GetNodeListRequest::under(None))
        .await?;
    Ok(json!(nodes.iter().map(NodeDetail::from).collect::<Vec<_>>()))
}

async fn read_scopes(client: &HinemosClient) -> Result<Value, AppError> {
    let scopes = client.repository().list_scopes().await?;
    Ok(json!(scopes.iter().map(ScopeSummary::from).collect::<Vec<_>>()))
}

async fn read_facility_tree(client: &HinemosClient) -> Result<Value, AppError> {
    let tree = client
        .repository()
        .get_facility_tree(None, Some(ALL_USERS_ROLE))
        .await?;
    serde_json::to_value(tree)
        .map_err(|err| AppError::internal(format!("facility tree serialization failed: {err}")))
}

async fn read_monitor_settings(client: &HinemosClient) -> Result<Value, AppError> {
    let monitors = client.monitor().list_monitors(None).await?;
    Ok(json!(monitors.iter().map(MonitorSummary::from).collect::<Vec<_>>()))
}

pub async fn handle_resources_read(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let resource_read: ReadResourceRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    let Some(uri) = RESOURCES
        .iter()
        .map(|(_, uri, _, _)| *uri)
        .find(|uri| *uri == resource_read.uri)
    else {
        return json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "resource_not_found",
                "message": "unknown resource uri",
                "details": {
                    "uri": resource_read.uri,
                },
            })),
        );
    };

    match read_resource(state, uri).await {
        Ok(content) => {
            let text = serde_json::to_string_pretty(&content).unwrap_or_else(|_| content.to_string());
            let result = serde_json::to_value(ReadResourceResult {
                contents: vec![ReadResourceContent::from(TextResourceContents {
                    meta: None,
                    mime_type: Some("application/json".to_string()),
                    text,
                    uri: uri.to_string(),
                })],
                meta: None,
            })
            .expect("read resource result serialization");

            json_rpc_result(id, result)
        }
        Err(err) => app_error_to_json_rpc(id, err),
    }
}
