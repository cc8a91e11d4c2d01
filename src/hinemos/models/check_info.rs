//! Type-specific check parameters, one request/response pair per monitor kind.
//! HTTP numeric and HTTP string monitors share the HTTP pair.

use serde::{Deserialize, Serialize};

use super::common::ConvertFlag;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingCheckInfo {
    pub run_count: u32,
    pub run_interval: u32,
    pub timeout: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PingCheckInfoResponse {
    pub run_count: Option<u32>,
    pub run_interval: Option<u32>,
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpCheckInfo {
    pub request_url: String,
    pub timeout: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    pub proxy_flg: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpCheckInfoResponse {
    pub request_url: Option<String>,
    pub timeout: Option<u32>,
    pub user_agent: Option<String>,
    pub connect_timeout: Option<u32>,
    pub request_method: Option<String>,
    pub post_data: Option<String>,
    pub auth_type: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub proxy_flg: Option<bool>,
    pub proxy_url: Option<String>,
    pub proxy_port: Option<u16>,
    pub proxy_user: Option<String>,
    pub proxy_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnmpCheckInfo {
    pub snmp_oid: String,
    pub convert_flg: ConvertFlag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnmpCheckInfoResponse {
    pub snmp_oid: Option<String>,
    pub convert_flg: Option<ConvertFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogfileCheckInfo {
    pub directory: String,
    pub file_name: String,
    pub file_encoding: String,
    pub file_return_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_tail: Option<String>,
    pub max_bytes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogfileCheckInfoResponse {
    pub directory: Option<String>,
    pub file_name: Option<String>,
    pub file_encoding: Option<String>,
    pub file_return_code: Option<String>,
    pub pattern_head: Option<String>,
    pub pattern_tail: Option<String>,
    pub max_bytes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlCheckInfo {
    pub connection_url: String,
    pub user: String,
    pub password: String,
    pub jdbc_driver: String,
    pub query: String,
    pub timeout: u32,
}

/// The manager echoes the statement back under `sql`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SqlCheckInfoResponse {
    pub connection_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub jdbc_driver: Option<String>,
    #[serde(alias = "query")]
    pub sql: Option<String>,
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmxCheckInfo {
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub convert_flg: ConvertFlag,
    pub master_id: String,
    pub url_format_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JmxCheckInfoResponse {
    pub port: Option<u16>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub url: Option<String>,
    pub convert_flg: Option<ConvertFlag>,
    pub master_id: Option<String>,
    pub url_format_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCheckInfo {
    pub param: String,
    pub case_sensitivity_flg: bool,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessCheckInfoResponse {
    pub param: Option<String>,
    pub case_sensitivity_flg: Option<bool>,
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCheckInfo {
    pub port_no: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    pub timeout: u32,
    pub run_count: u32,
    pub run_interval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortCheckInfoResponse {
    pub port_no: Option<u16>,
    pub service_id: Option<String>,
    pub timeout: Option<u32>,
    pub run_count: Option<u32>,
    pub run_interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinEventCheckInfo {
    pub log_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WinEventCheckInfoResponse {
    pub log_name: Option<String>,
    pub source: Option<String>,
    pub level: Option<i32>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCheckInfo {
    pub command: String,
    pub timeout: u32,
    pub spec_flg: bool,
    pub convert_flg: ConvertFlag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomCheckInfoResponse {
    pub command: Option<String>,
    pub timeout: Option<u32>,
    pub spec_flg: Option<bool>,
    pub convert_flg: Option<ConvertFlag>,
}
