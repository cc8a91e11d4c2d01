//! JSON-RPC envelopes and the mapping of adapter errors onto JSON-RPC codes.

use rust_mcp_sdk::schema::{
    JsonrpcErrorResponse, JsonrpcResultResponse, RequestId, Result as McpResult, RpcError,
};
use serde_json::{json, Value};

use crate::errors::AppError;

pub fn is_json_rpc_error(value: &Value) -> bool {
    value.get("error").is_some()
}

pub fn app_error_to_json_rpc(id: Option<Value>, err: AppError) -> Value {
    let data = Some(json!({
        "code": err.code(),
        "message": err.public_message(),
        "details": {}
    }));

    match err {
        AppError::BadRequest { .. } | AppError::NotFound { .. } => {
            json_rpc_error_with_data(id, -32602, "Invalid params", data)
        }
        AppError::Unauthorized { .. } => json_rpc_error_with_data(id, -32001, "Unauthorized", data),
        AppError::Upstream { .. } => json_rpc_error_with_data(id, -32002, "Upstream error", data),
        AppError::Internal { message, .. } => {
            tracing::error!(error = %message, "mcp request failed with internal error");
            json_rpc_error(id, -32603, "Internal error")
        }
    }
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json_rpc_error_with_data(id, code, message, None)
}

pub fn json_rpc_error_with_data(
    id: Option<Value>,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> Value {
    let response = JsonrpcErrorResponse::new(
        RpcError {
            code: i64::from(code),
            data,
            message: message.to_string(),
        },
        id.as_ref().and_then(value_to_request_id),
    );
    serde_json::to_value(response).expect("jsonrpc error response serialization")
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    if let Some(request_id) = id.as_ref().and_then(value_to_request_id) {
        let extra = result.as_object().cloned();
        let response = JsonrpcResultResponse::new(request_id, McpResult { meta: None, extra });
        return serde_json::to_value(response).expect("jsonrpc result response serialization");
    }

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

pub fn value_to_request_id(value: &Value) -> Option<RequestId> {
    if let Some(string_id) = value.as_str() {
        return Some(RequestId::String(string_id.to_string()));
    }

    value.as_i64().map(RequestId::Integer)
}

pub fn request_id_to_value(id: RequestId) -> Value {
    match id {
        RequestId::String(value) => Value::String(value),
        RequestId::Integer(value) => Value::Number(value.into()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::hinemos::HinemosError;

    #[test]
    fn validation_errors_become_invalid_params() {
        let err = AppError::from(HinemosError::missing_parameter("url", "HTTP numeric monitors"));
        let response = app_error_to_json_rpc(Some(json!(7)), err);

        assert_eq!(response["id"], 7);
        assert_eq!(response["error"]["code"], -32602);
        assert_eq!(response["error"]["data"]["code"], "invalid_argument");
        assert_eq!(
            response["error"]["data"]["message"],
            "'url' parameter is required for HTTP numeric monitors"
        );
    }

    #[test]
    fn upstream_errors_keep_manager_message() {
        let err = AppError::from(HinemosError::from_response(404, r#"{"message":"facility not found"}"#));
        let response = app_error_to_json_rpc(Some(json!("a")), err);

        assert_eq!(response["error"]["code"], -32002);
        assert_eq!(response["error"]["data"]["code"], "hinemos_api_error");
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = app_error_to_json_rpc(Some(json!(1)), AppError::internal("boom"));
        assert_eq!(response["error"]["code"], -32603);
        assert!(response["error"].get("data").map_or(true, Value::is_null));
    }

    #[test]
    fn result_without_usable_id_falls_back_to_raw_envelope() {
        let response = json_rpc_result(Some(json!(null)), json!({"ok": true}));
        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["result"]["ok"], true);
    }
}
