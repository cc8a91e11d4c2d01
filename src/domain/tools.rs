//! Tools exposed to agents.
//!
//! Every tool takes a JSON object of arguments and answers with JSON text, or
//! with `Error: <message>` when the call fails. The MCP, HTTP and in-process
//! bindings all dispatch through [`run_tool`].

use std::str::FromStr;

use rust_mcp_sdk::{
    macros,
    schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent, Tool},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::domain::summaries::{MonitorSummary, NodeDetail, NodeSummary};
use crate::hinemos::{
    models::{ConvertFlag, GetNodeListRequest, MonitorKind, Priority, RunInterval},
    monitor::{CreateMonitorArgs, PatternRule},
    repository::{NewNode, NewScope, NodePatch, ALL_USERS_ROLE},
    HinemosClient, HinemosError,
};
use crate::mcp::rpc::{json_rpc_error, json_rpc_error_with_data, json_rpc_result};
use crate::{errors::AppError, AppState};

pub const DEFAULT_PING_RUN_COUNT: u32 = 3;
const NODE_SUGGESTION_LIMIT: usize = 5;

#[macros::mcp_tool(
    name = "hinemos_get_facility_tree",
    description = "Get the facility tree showing which nodes belong to which scopes"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetFacilityTreeTool {
    /// Facility to start from; the whole tree when omitted.
    pub root_facility_id: Option<String>,
    /// Owner role used for access control (default ALL_USERS).
    pub owner_role_id: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_list_nodes",
    description = "List repository nodes, optionally only those under a scope"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct ListNodesTool {
    pub parent_facility_id: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_get_repository_node",
    description = "Get a specific node from the Hinemos repository"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetRepositoryNodeTool {
    pub facility_id: String,
}

#[macros::mcp_tool(
    name = "hinemos_create_repository_node",
    description = "Create a new node in the Hinemos repository"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct CreateRepositoryNodeTool {
    pub facility_id: String,
    pub facility_name: String,
    /// IPv4 or IPv6 address of the node.
    pub ip_address: String,
    pub description: Option<String>,
    /// Platform family such as LINUX or WINDOWS.
    pub platform_family: Option<String>,
    pub sub_platform_family: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_update_repository_node",
    description = "Update name, description or address of an existing node"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct UpdateRepositoryNodeTool {
    pub facility_id: String,
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_list_monitors",
    description = "List monitor settings, optionally restricted to one monitor type"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct ListMonitorsTool {
    /// One of ping, http_numeric, http_string, snmp, logfile, sql, jmx, process, port, winevent, custom.
    pub monitor_type: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_get_monitor",
    description = "Get a specific monitor configuration"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetMonitorTool {
    pub monitor_id: String,
}

#[macros::mcp_tool(
    name = "hinemos_create_monitor",
    description = "Create a monitor of one of 11 types: ping, http_numeric, http_string, snmp, logfile, sql, jmx, process, port, winevent, custom"
)]
#[derive(Debug, Default, Deserialize, Serialize, macros::JsonSchema)]
pub struct CreateMonitorTool {
    pub monitor_type: String,
    pub monitor_id: String,
    pub facility_id: String,
    pub description: Option<String>,
    /// NONE, SEC_30, MIN_01, MIN_05 (default), MIN_10, MIN_30 or MIN_60.
    pub run_interval: Option<String>,
    /// Ping attempts (ping, default 3) or checks per run (port).
    pub run_count: Option<u32>,
    /// Milliseconds; the default depends on the monitor type.
    pub timeout: Option<u32>,
    /// Target URL for HTTP monitors, JMX URL format for JMX monitors.
    pub url: Option<String>,
    /// Patterns reported as CRITICAL (http_string, logfile, winevent).
    pub error_patterns: Option<Vec<String>>,
    /// Patterns reported as WARNING (http_string, logfile, winevent).
    pub warning_patterns: Option<Vec<String>>,
    pub oid: Option<String>,
    /// NONE or DELTA.
    pub convert_flg: Option<String>,
    pub directory: Option<String>,
    pub filename: Option<String>,
    pub encoding: Option<String>,
    pub connection_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub jdbc_driver: Option<String>,
    pub sql: Option<String>,
    /// JMX port.
    pub port: Option<u16>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    /// Process name pattern.
    pub param: Option<String>,
    pub case_sensitivity_flg: Option<bool>,
    pub min_count: Option<u32>,
    pub max_count: Option<u32>,
    /// TCP port checked by port monitors.
    pub port_no: Option<u16>,
    /// TCP, FTP, SMTP, DNS, NTP, POP3, IMAP, SMTPS, POP3S or IMAPS.
    pub service_id: Option<String>,
    pub log_name: Option<String>,
    pub source: Option<String>,
    pub level: Option<i32>,
    pub keywords: Option<String>,
    pub command: Option<String>,
    pub spec_flg: Option<bool>,
    pub warning_threshold: Option<f64>,
    pub critical_threshold: Option<f64>,
}

#[macros::mcp_tool(
    name = "hinemos_set_monitor_state",
    description = "Enable or disable monitoring or data collection for monitors"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct SetMonitorStateTool {
    pub monitor_ids: Vec<String>,
    /// monitor or collector.
    pub target: String,
    pub enabled: bool,
}

#[macros::mcp_tool(
    name = "hinemos_delete_monitors",
    description = "Delete monitor settings"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct DeleteMonitorsTool {
    pub monitor_ids: Vec<String>,
}

#[macros::mcp_tool(
    name = "hinemos_create_scope",
    description = "Create a new scope in the Hinemos repository"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct CreateScopeTool {
    pub facility_id: String,
    pub facility_name: String,
    /// Scope to create the new scope under.
    pub parent_facility_id: Option<String>,
    pub description: Option<String>,
    pub owner_role_id: Option<String>,
    pub icon_image: Option<String>,
}

#[macros::mcp_tool(
    name = "hinemos_assign_nodes_to_scope",
    description = "Assign nodes to a scope"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct AssignNodesToScopeTool {
    pub scope_id: String,
    pub node_ids: Vec<String>,
}

#[macros::mcp_tool(
    name = "hinemos_remove_nodes_from_scope",
    description = "Remove nodes from a scope"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct RemoveNodesFromScopeTool {
    pub scope_id: String,
    pub node_ids: Vec<String>,
}

pub fn build_tools_list() -> Vec<Tool> {
    vec![
        GetFacilityTreeTool::tool(),
        ListNodesTool::tool(),
        GetRepositoryNodeTool::tool(),
        CreateRepositoryNodeTool::tool(),
        UpdateRepositoryNodeTool::tool(),
        ListMonitorsTool::tool(),
        GetMonitorTool::tool(),
        CreateMonitorTool::tool(),
        SetMonitorStateTool::tool(),
        DeleteMonitorsTool::tool(),
        CreateScopeTool::tool(),
        AssignNodesToScopeTool::tool(),
        RemoveNodesFromScopeTool::tool(),
    ]
}

pub fn is_known_tool(name: &str) -> bool {
    build_tools_list().iter().any(|tool| tool.name == name)
}

/// Text answer of a tool call as every binding reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn from_result(result: &Result<Value, AppError>) -> Self {
        match result {
            Ok(value) => Self {
                text: serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
                is_error: false,
            },
            Err(err) => Self {
                text: error_text(err),
                is_error: true,
            },
        }
    }
}

pub fn error_text(err: &AppError) -> String {
    format!("Error: {}", err.public_message())
}

/// In-process entry point. Never fails: errors come back as `Error: ...` text.
pub async fn call_tool(state: &AppState, name: &str, arguments: Value) -> ToolOutput {
    ToolOutput::from_result(&run_tool(state, name, arguments).await)
}

pub async fn run_tool(state: &AppState, name: &str, arguments: Value) -> Result<Value, AppError> {
    let client = state.session();
    let result = match name {
        "hinemos_get_facility_tree" => get_facility_tree(&client, parse_arguments(arguments)?).await,
        "hinemos_list_nodes" => list_nodes(&client, parse_arguments(arguments)?).await,
        "hinemos_get_repository_node" => get_repository_node(&client, parse_arguments(arguments)?).await,
        "hinemos_create_repository_node" => {
            create_repository_node(&client, parse_arguments(arguments)?).await
        }
        "hinemos_update_repository_node" => {
            update_repository_node(&client, parse_arguments(arguments)?).await
        }
        "hinemos_list_monitors" => list_monitors(&client, parse_arguments(arguments)?).await,
        "hinemos_get_monitor" => get_monitor(&client, parse_arguments(arguments)?).await,
        "hinemos_create_monitor" => create_monitor(&client, parse_arguments(arguments)?).await,
        "hinemos_set_monitor_state" => set_monitor_state(&client, parse_arguments(arguments)?).await,
        "hinemos_delete_monitors" => delete_monitors(&client, parse_arguments(arguments)?).await,
        "hinemos_create_scope" => create_scope(&client, parse_arguments(arguments)?).await,
        "hinemos_assign_nodes_to_scope" => {
            assign_nodes_to_scope(&client, parse_arguments(arguments)?).await
        }
        "hinemos_remove_nodes_from_scope" => {
            remove_nodes_from_scope(&client, parse_arguments(arguments)?).await
        }
        _ => Err(AppError::not_found(
            "tool_not_found",
            format!("Tool '{name}' not found"),
        )),
    };

    match &result {
        Ok(_) => info!(tool = %name, "tool call succeeded"),
        Err(err) => warn!(tool = %name, code = err.code(), error = %err, "tool call failed"),
    }
    result
}

pub async fn handle_tools_call(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    if !is_known_tool(&tool_call.name) {
        return json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": "tool_not_found",
                "message": "unknown tool name",
                "details": {
                    "name": tool_call.name,
                },
            })),
        );
    }

    let arguments = Value::Object(tool_call.arguments.unwrap_or_default());
    let result = run_tool(state, &tool_call.name, arguments).await;
    let output = ToolOutput::from_result(&result);
    let structured_content = match result {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    };

    json_rpc_result(
        id,
        serde_json::to_value(CallToolResult {
            content: vec![ContentBlock::from(TextContent::new(output.text, None, None))],
            is_error: output.is_error.then_some(true),
            meta: None,
            structured_content,
        })
        .expect("tool call result serialization"),
    )
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, AppError> {
    let arguments = match arguments {
        Value::Null => json!({}),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|err| AppError::bad_request("invalid_arguments", format!("invalid arguments: {err}")))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|err| AppError::internal(format!("tool result serialization failed: {err}")))
}

fn parse_choice<T: FromStr<Err = String>>(value: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|message: String| AppError::bad_request("invalid_argument", message))
}

async fn get_facility_tree(
    client: &HinemosClient,
    args: GetFacilityTreeTool,
) -> Result<Value, AppError> {
    let owner_role_id = args.owner_role_id.as_deref().unwrap_or(ALL_USERS_ROLE);
    let tree = client
        .repository()
        .get_facility_tree(args.root_facility_id.as_deref(), Some(owner_role_id))
        .await?;
    to_json(&tree)
}

async fn list_nodes(client: &HinemosClient, args: ListNodesTool) -> Result<Value, AppError> {
    let filter = GetNodeListRequest::under(args.parent_facility_id);
    let nodes = client.repository().list_nodes(&filter).await?;
    let nodes: Vec<NodeSummary> = nodes.iter().map(NodeSummary::from).collect();
    Ok(json!({
        "count": nodes.len(),
        "nodes": nodes,
    }))
}

async fn get_repository_node(
    client: &HinemosClient,
    args: GetRepositoryNodeTool,
) -> Result<Value, AppError> {
    match client.repository().get_node(&args.facility_id, false).await {
        Ok(node) => to_json(&NodeDetail::from(&node)),
        Err(err) if err.status() == Some(404) => {
            Err(node_not_found(client, &args.facility_id, err).await)
        }
        Err(err) => Err(err.into()),
    }
}

/// Turns a 404 into a hint listing a few existing node IDs. Falls back to the
/// original error when the node list is unavailable too.
async fn node_not_found(client: &HinemosClient, facility_id: &str, err: HinemosError) -> AppError {
    let Ok(nodes) = client
        .repository()
        .list_nodes(&GetNodeListRequest::under(None))
        .await
    else {
        return err.into();
    };

    let available = nodes
        .iter()
        .take(NODE_SUGGESTION_LIMIT)
        .map(|node| node.facility_id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    AppError::not_found(
        "node_not_found",
        format!(
            "Node '{facility_id}' not found. Available node IDs include: {available}. \
             Use hinemos_get_facility_tree to see all available nodes and their hierarchy."
        ),
    )
}

async fn create_repository_node(
    client: &HinemosClient,
    args: CreateRepositoryNodeTool,
) -> Result<Value, AppError> {
    let node = client
        .repository()
        .create_node(NewNode {
            facility_id: args.facility_id,
            facility_name: args.facility_name,
            ip_address: args.ip_address,
            description: args.description,
            platform_family: args.platform_family,
            sub_platform_family: args.sub_platform_family,
            owner_role_id: None,
        })
        .await?;

    Ok(json!({
        "status": "created",
        "facility_id": node.facility_id,
        "facility_name": node.facility_name,
    }))
}

async fn update_repository_node(
    client: &HinemosClient,
    args: UpdateRepositoryNodeTool,
) -> Result<Value, AppError> {
    let node = client
        .repository()
        .update_node(
            &args.facility_id,
            NodePatch {
                facility_name: args.facility_name,
                description: args.description,
                ip_address: args.ip_address,
                ..Default::default()
            },
        )
        .await?;

    Ok(json!({
        "status": "updated",
        "facility_id": node.facility_id,
        "facility_name": node.facility_name,
    }))
}

async fn list_monitors(client: &HinemosClient, args: ListMonitorsTool) -> Result<Value, AppError> {
    let kind = args
        .monitor_type
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_choice::<MonitorKind>)
        .transpose()?;

    let monitors = client.monitor().list_monitors(None).await?;
    let monitors: Vec<MonitorSummary> = monitors
        .iter()
        .filter(|monitor| match kind {
            Some(kind) => monitor.info.monitor_type_id.as_deref() == Some(kind.type_id()),
            None => true,
        })
        .map(MonitorSummary::from)
        .collect();

    Ok(json!({
        "count": monitors.len(),
        "monitors": monitors,
    }))
}

async fn get_monitor(client: &HinemosClient, args: GetMonitorTool) -> Result<Value, AppError> {
    let monitor = client.monitor().get_monitor(&args.monitor_id).await?;
    to_json(&MonitorSummary::from(&monitor))
}

async fn create_monitor(client: &HinemosClient, args: CreateMonitorTool) -> Result<Value, AppError> {
    let kind: MonitorKind = parse_choice(&args.monitor_type)?;
    let create_args = create_monitor_args(kind, args)?;
    let created = client.monitor().create(kind, &create_args).await?;

    Ok(json!({
        "status": "created",
        "monitor_id": created.monitor_id,
        "monitor_type": kind.as_str(),
        "description": created.description,
    }))
}

/// Maps flat tool arguments onto builder input, applying the defaults agents
/// rely on. Prediction and change analysis stay off for tool-created monitors.
pub fn create_monitor_args(
    kind: MonitorKind,
    args: CreateMonitorTool,
) -> Result<CreateMonitorArgs, AppError> {
    let run_interval = match args.run_interval.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => RunInterval::parse_argument(value)
            .map_err(|message| AppError::bad_request("invalid_argument", message))?,
        _ => RunInterval::Min05,
    };
    let convert_flg = args
        .convert_flg
        .as_deref()
        .map(parse_choice::<ConvertFlag>)
        .transpose()?;
    let run_count = match kind {
        MonitorKind::Ping => Some(args.run_count.unwrap_or(DEFAULT_PING_RUN_COUNT)),
        _ => args.run_count,
    };

    let mut patterns = Vec::new();
    for pattern in args.error_patterns.unwrap_or_default() {
        patterns.push(PatternRule::new(pattern, Priority::Critical, "Error pattern found"));
    }
    for pattern in args.warning_patterns.unwrap_or_default() {
        patterns.push(PatternRule::new(pattern, Priority::Warning, "Warning pattern found"));
    }

    Ok(CreateMonitorArgs {
        monitor_id: args.monitor_id,
        facility_id: args.facility_id,
        description: args.description,
        run_interval: Some(run_interval),
        patterns,
        prediction_enabled: Some(false),
        change_enabled: Some(false),
        run_count,
        timeout: args.timeout,
        url: args.url,
        oid: args.oid,
        convert_flg,
        directory: args.directory,
        filename: args.filename,
        encoding: args.encoding,
        connection_url: args.connection_url,
        user: args.user,
        password: args.password,
        jdbc_driver: args.jdbc_driver,
        sql: args.sql,
        port: args.port,
        auth_user: args.auth_user,
        auth_password: args.auth_password,
        param: args.param,
        command: args.command,
        case_sensitive: args.case_sensitivity_flg,
        min_count: args.min_count.map(f64::from),
        max_count: args.max_count.map(f64::from),
        port_no: args.port_no,
        service_id: args.service_id,
        log_name: args.log_name,
        source: args.source,
        level: args.level,
        keywords: args.keywords,
        spec_flg: args.spec_flg,
        warning_threshold: args.warning_threshold,
        critical_threshold: args.critical_threshold,
        ..Default::default()
    })
}

async fn set_monitor_state(
    client: &HinemosClient,
    args: SetMonitorStateTool,
) -> Result<Value, AppError> {
    let monitor = client.monitor();
    let submitted = match (args.target.trim().to_ascii_lowercase().as_str(), args.enabled) {
        ("monitor", true) => {
            monitor.enable_monitors(&args.monitor_ids).await?;
            args.monitor_ids
        }
        ("monitor", false) => {
            monitor.disable_monitors(&args.monitor_ids).await?;
            args.monitor_ids
        }
        ("collector", true) => {
            monitor.enable_collectors(&args.monitor_ids).await?;
            args.monitor_ids
        }
        ("collector", false) => monitor.disable_collectors(&args.monitor_ids).await?,
        _ => {
            return Err(AppError::bad_request(
                "invalid_argument",
                format!("invalid target '{}', expected monitor or collector", args.target),
            ))
        }
    };

    Ok(json!({
        "status": "success",
        "target": args.target.trim().to_ascii_lowercase(),
        "enabled": args.enabled,
        "monitor_ids": submitted,
    }))
}

async fn delete_monitors(client: &HinemosClient, args: DeleteMonitorsTool) -> Result<Value, AppError> {
    client.monitor().delete_monitors(&args.monitor_ids).await?;
    Ok(json!({
        "status": "deleted",
        "monitor_ids": args.monitor_ids,
    }))
}

async fn create_scope(client: &HinemosClient, args: CreateScopeTool) -> Result<Value, AppError> {
    let parent_facility_id = args
        .parent_facility_id
        .filter(|parent| !parent.trim().is_empty());
    let scope = client
        .repository()
        .create_scope(NewScope {
            facility_id: args.facility_id,
            facility_name: args.facility_name,
            parent_facility_id: parent_facility_id.clone(),
            description: args.description,
            owner_role_id: Some(args.owner_role_id.unwrap_or_else(|| ALL_USERS_ROLE.to_string())),
            icon_image: args.icon_image,
        })
        .await?;

    Ok(json!({
        "status": "created",
        "facility_id": scope.facility_id,
        "facility_name": scope.facility_name,
        "description": scope.description,
        "parent_facility_id": parent_facility_id,
    }))
}

async fn assign_nodes_to_scope(
    client: &HinemosClient,
    args: AssignNodesToScopeTool,
) -> Result<Value, AppError> {
    client
        .repository()
        .assign_nodes(&args.scope_id, &args.node_ids)
        .await?;

    Ok(json!({
        "status": "success",
        "scope_id": args.scope_id,
        "message": format!(
            "Successfully assigned {} nodes to scope {}",
            args.node_ids.len(),
            args.scope_id
        ),
        "assigned_nodes": args.node_ids,
    }))
}

async fn remove_nodes_from_scope(
    client: &HinemosClient,
    args: RemoveNodesFromScopeTool,
) -> Result<Value, AppError> {
    client
        .repository()
        .release_nodes(&args.scope_id, &args.node_ids)
        .await?;

    Ok(json!({
        "status": "success",
        "scope_id": args.scope_id,
        "message": format!(
            "Successfully removed {} nodes from scope {}",
            args.node_ids.len(),
            args.scope_id
        ),
        "removed_nodes": args.node_ids,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::hinemos::mock::{echo, test_settings, MockTransport};

    fn state_with(transport: &Arc<MockTransport>) -> AppState {
        AppState::new(None, test_settings(), transport.clone())
    }

    #[test]
    fn tool_table_lists_thirteen_tools() {
        let names: Vec<String> = build_tools_list().into_iter().map(|tool| tool.name).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "hinemos_get_facility_tree");
        assert!(names.contains(&"hinemos_set_monitor_state".to_string()));
        assert!(is_known_tool("hinemos_create_monitor"));
        assert!(!is_known_tool("hinemos_list_jobs"));
    }

    #[tokio::test]
    async fn list_nodes_returns_count_and_summaries() {
        let transport = Arc::new(MockTransport::new().on(
            Method::POST,
            "RepositoryRestEndpoints/repository/node_withoutNodeConfigInfo_search",
            200,
            json!([
                {"facilityId": "WEB01", "facilityName": "web", "ipAddressVersion": "IPV4",
                 "ipAddressV4": "192.168.0.10", "platformFamily": "LINUX", "valid": true},
                {"facilityId": "DB01", "facilityName": "db"}
            ]),
        ));

        let output = call_tool(&state_with(&transport), "hinemos_list_nodes", json!({})).await;
        assert!(!output.is_error, "{}", output.text);

        let value: Value = serde_json::from_str(&output.text).expect("json text");
        assert_eq!(value["count"], 2);
        assert_eq!(value["nodes"][0]["ip_address"], "192.168.0.10");
        assert_eq!(value["nodes"][1]["valid"], Value::Null);
    }

    #[tokio::test]
    async fn missing_url_is_reported_as_error_text_without_calls() {
        let transport = Arc::new(MockTransport::new());
        let output = call_tool(
            &state_with(&transport),
            "hinemos_create_monitor",
            json!({"monitor_type": "http_numeric", "monitor_id": "HTTP_01", "facility_id": "WEB01"}),
        )
        .await;

        assert!(output.is_error);
        assert_eq!(
            output.text,
            "Error: 'url' parameter is required for HTTP numeric monitors"
        );
        assert_eq!(transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn unknown_monitor_type_is_rejected() {
        let transport = Arc::new(MockTransport::new());
        let output = call_tool(
            &state_with(&transport),
            "hinemos_create_monitor",
            json!({"monitor_type": "icmp", "monitor_id": "X", "facility_id": "Y"}),
        )
        .await;

        assert!(output.is_error);
        assert!(output.text.starts_with("Error: unsupported monitor type 'icmp'"));
        assert_eq!(transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn create_ping_monitor_uses_adapter_defaults() {
        let transport = Arc::new(MockTransport::new().on_fn(
            Method::POST,
            "MonitorsettingRestEndpoints/monitorsetting/ping",
            echo,
        ));

        let output = call_tool(
            &state_with(&transport),
            "hinemos_create_monitor",
            json!({
                "monitor_type": "ping",
                "monitor_id": "PING_01",
                "facility_id": "NODE01",
                "description": "ping web"
            }),
        )
        .await;
        assert!(!output.is_error, "{}", output.text);

        let value: Value = serde_json::from_str(&output.text).expect("json text");
        assert_eq!(value["status"], "created");
        assert_eq!(value["monitor_id"], "PING_01");
        assert_eq!(value["monitor_type"], "ping");

        let sent = transport.calls_to(Method::POST, "MonitorsettingRestEndpoints/monitorsetting/ping");
        let body = sent[0].body.as_ref().expect("body");
        assert_eq!(body["runInterval"], "MIN_05");
        assert_eq!(body["pingCheckInfo"]["runCount"], 3);
        assert_eq!(body["predictionFlg"], false);
    }

    #[test]
    fn string_patterns_map_to_priorities() {
        let args = create_monitor_args(
            MonitorKind::Logfile,
            CreateMonitorTool {
                monitor_type: "logfile".to_string(),
                monitor_id: "LOG_01".to_string(),
                facility_id: "NODE01".to_string(),
                error_patterns: Some(vec!["FATAL".to_string()]),
                warning_patterns: Some(vec!["WARN".to_string()]),
                ..Default::default()
            },
        )
        .expect("args");

        assert_eq!(args.patterns.len(), 2);
        assert_eq!(args.patterns[0].priority, Priority::Critical);
        assert_eq!(args.patterns[1].priority, Priority::Warning);
        assert_eq!(args.run_count, None);
    }

    #[test]
    fn invalid_run_interval_is_rejected() {
        let err = create_monitor_args(
            MonitorKind::Ping,
            CreateMonitorTool {
                run_interval: Some("MIN_02".to_string()),
                ..Default::default()
            },
        )
        .expect_err("invalid interval");
        assert_eq!(err.code(), "invalid_argument");
    }

    #[test]
    fn run_interval_argument_ignores_case() {
        let args = create_monitor_args(
            MonitorKind::Ping,
            CreateMonitorTool {
                run_interval: Some("min_10".to_string()),
                ..Default::default()
            },
        )
        .expect("args");
        assert_eq!(args.run_interval, Some(RunInterval::Min10));
    }

    #[tokio::test]
    async fn set_monitor_state_reports_submitted_ids() {
        let transport = Arc::new(
            MockTransport::new()
                .on(
                    Method::GET,
                    "MonitorsettingRestEndpoints/monitorsetting/monitor/A",
                    200,
                    json!({"monitorId": "A", "predictionFlg": true}),
                )
                .on(
                    Method::GET,
                    "MonitorsettingRestEndpoints/monitorsetting/monitor/B",
                    200,
                    json!({"monitorId": "B", "predictionFlg": false}),
                )
                .on(
                    Method::PUT,
                    "MonitorsettingRestEndpoints/monitorsetting/monitor_collectorValid",
                    200,
                    json!({}),
                ),
        );

        let output = call_tool(
            &state_with(&transport),
            "hinemos_set_monitor_state",
            json!({"monitor_ids": ["A", "B"], "target": "collector", "enabled": false}),
        )
        .await;
        assert!(!output.is_error, "{}", output.text);

        let value: Value = serde_json::from_str(&output.text).expect("json text");
        assert_eq!(value["status"], "success");
        assert_eq!(value["monitor_ids"], json!(["B"]));
    }

    #[tokio::test]
    async fn set_monitor_state_rejects_unknown_target() {
        let transport = Arc::new(MockTransport::new());
        let output = call_tool(
            &state_with(&transport),
            "hinemos_set_monitor_state",
            json!({"monitor_ids": ["A"], "target": "notifier", "enabled": true}),
        )
        .await;

        assert!(output.is_error);
        assert_eq!(transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn missing_node_suggests_existing_ids() {
        let transport = Arc::new(
            MockTransport::new()
                .on(
                    Method::GET,
                    "RepositoryRestEndpoints/repository/node_withoutNodeConfigInfo/UNKNOWN",
                    404,
                    json!({"message": "facility not found"}),
                )
                .on(
                    Method::POST,
                    "RepositoryRestEndpoints/repository/node_withoutNodeConfigInfo_search",
                    200,
                    json!([{"facilityId": "WEB01"}, {"facilityId": "DB01"}]),
                ),
        );

        let output = call_tool(
            &state_with(&transport),
            "hinemos_get_repository_node",
            json!({"facility_id": "UNKNOWN"}),
        )
        .await;

        assert!(output.is_error);
        assert!(output
            .text
            .starts_with("Error: Node 'UNKNOWN' not found. Available node IDs include: WEB01, DB01."));
    }

    #[tokio::test]
    async fn assign_nodes_reports_message() {
        let transport = Arc::new(MockTransport::new().on(
            Method::PUT,
            "RepositoryRestEndpoints/repository/facilityRelation/WEB",
            200,
            json!({}),
        ));

        let output = call_tool(
            &state_with(&transport),
            "hinemos_assign_nodes_to_scope",
            json!({"scope_id": "WEB", "node_ids": ["WEB01", "WEB02"]}),
        )
        .await;
        assert!(!output.is_error, "{}", output.text);

        let value: Value = serde_json::from_str(&output.text).expect("json text");
        assert_eq!(value["assigned_nodes"], json!(["WEB01", "WEB02"]));
        assert_eq!(value["message"], "Successfully assigned 2 nodes to scope WEB");
    }

    #[tokio::test]
    async fn missing_required_argument_is_error_text() {
        let transport = Arc::new(MockTransport::new());
        let output = call_tool(&state_with(&transport), "hinemos_get_monitor", json!({})).await;

        assert!(output.is_error);
        assert!(output.text.contains("missing field `monitor_id`"));
    }

    #[tokio::test]
    async fn unknown_tool_is_error_text() {
        let transport = Arc::new(MockTransport::new());
        let output = call_tool(&state_with(&transport), "hinemos_reboot", json!({})).await;
        assert_eq!(output.text, "Error: Tool 'hinemos_reboot' not found");
    }
}
