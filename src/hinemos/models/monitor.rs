//! Monitor setting DTOs.
//!
//! Every kind is a shared base plus either the numeric or the string settings
//! block, plus its own check info. Requests skip unset fields; responses accept
//! anything the manager adds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::check_info::*;
use super::common::{
    MonitorNumericType, MonitorType, NotifyRelation, PredictionMethod, Priority,
    PriorityChangeFailureType, PriorityChangeJudgmentType, RunInterval,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorKind {
    Ping,
    HttpNumeric,
    HttpString,
    Snmp,
    Logfile,
    Sql,
    Jmx,
    Process,
    Port,
    WinEvent,
    Custom,
}

impl MonitorKind {
    pub const ALL: [MonitorKind; 11] = [
        Self::Ping,
        Self::HttpNumeric,
        Self::HttpString,
        Self::Snmp,
        Self::Logfile,
        Self::Sql,
        Self::Jmx,
        Self::Process,
        Self::Port,
        Self::WinEvent,
        Self::Custom,
    ];

    /// Name used by tool arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::HttpNumeric => "http_numeric",
            Self::HttpString => "http_string",
            Self::Snmp => "snmp",
            Self::Logfile => "logfile",
            Self::Sql => "sql",
            Self::Jmx => "jmx",
            Self::Process => "process",
            Self::Port => "port",
            Self::WinEvent => "winevent",
            Self::Custom => "custom",
        }
    }

    /// Endpoint segment under `monitorsetting/`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::HttpNumeric => "httpNumeric",
            Self::HttpString => "httpString",
            Self::Snmp => "snmpNumeric",
            Self::Logfile => "logfile",
            Self::Sql => "sqlNumeric",
            Self::Jmx => "jmx",
            Self::Process => "process",
            Self::Port => "serviceport",
            Self::WinEvent => "winevent",
            Self::Custom => "customNumeric",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ping => "ping monitors",
            Self::HttpNumeric => "HTTP numeric monitors",
            Self::HttpString => "HTTP string monitors",
            Self::Snmp => "SNMP monitors",
            Self::Logfile => "logfile monitors",
            Self::Sql => "SQL monitors",
            Self::Jmx => "JMX monitors",
            Self::Process => "process monitors",
            Self::Port => "port monitors",
            Self::WinEvent => "Windows event monitors",
            Self::Custom => "custom command monitors",
        }
    }

    /// `monitorTypeId` the manager reports for monitors of this kind.
    pub fn type_id(self) -> &'static str {
        match self {
            Self::Ping => "MON_PNG_N",
            Self::HttpNumeric => "MON_HTP_N",
            Self::HttpString => "MON_HTP_S",
            Self::Snmp => "MON_SNMP_N",
            Self::Logfile => "MON_LOGF_S",
            Self::Sql => "MON_SQL_N",
            Self::Jmx => "MON_JMX_N",
            Self::Process => "MON_PRC_N",
            Self::Port => "MON_PRT_N",
            Self::WinEvent => "MON_WINEVENT_S",
            Self::Custom => "MON_CUSTOM_N",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::HttpString | Self::Logfile | Self::WinEvent)
    }
}

impl fmt::Display for MonitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonitorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let names = Self::ALL.map(MonitorKind::as_str).join(", ");
                format!("unsupported monitor type '{value}', expected one of: {names}")
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorRequestInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_flg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_interval: Option<RunInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_relation_list: Option<Vec<NotifyRelation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericValueInfo {
    pub monitor_numeric_type: MonitorNumericType,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_lower_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_upper_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericRequestInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_flg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_flg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_method: Option<PredictionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_analysys_range: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_flg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_analysys_range: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value_info: Option<Vec<NumericValueInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_notify_relation_list: Option<Vec<NotifyRelation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_notify_relation_list: Option<Vec<NotifyRelation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValueInfo {
    pub order_no: u32,
    pub priority: Priority,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub case_sensitivity_flg: bool,
    pub process_type: bool,
    pub valid_flg: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringRequestInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_flg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value_info: Option<Vec<StringValueInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_change_judgment_type: Option<PriorityChangeJudgmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_change_failure_type: Option<PriorityChangeFailureType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorResponseInfo {
    pub monitor_id: String,
    pub application: Option<String>,
    pub description: Option<String>,
    pub monitor_flg: Option<bool>,
    pub run_interval: Option<RunInterval>,
    pub calendar_id: Option<String>,
    pub facility_id: Option<String>,
    pub notify_relation_list: Option<Vec<NotifyRelation>>,
    pub owner_role_id: Option<String>,
    pub monitor_type: Option<MonitorType>,
    pub monitor_type_id: Option<String>,
    pub scope: Option<String>,
    pub reg_date: Option<String>,
    pub reg_user: Option<String>,
    pub update_date: Option<String>,
    pub update_user: Option<String>,
    pub sdml_monitor_type_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericValueInfoResponse {
    pub monitor_numeric_type: Option<MonitorNumericType>,
    pub priority: Option<Priority>,
    pub threshold_lower_limit: Option<f64>,
    pub threshold_upper_limit: Option<f64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericResponseInfo {
    pub collector_flg: Option<bool>,
    pub item_name: Option<String>,
    pub measure: Option<String>,
    pub prediction_flg: Option<bool>,
    pub prediction_method: Option<PredictionMethod>,
    pub prediction_analysys_range: Option<u32>,
    pub prediction_target: Option<u32>,
    pub prediction_application: Option<String>,
    pub change_flg: Option<bool>,
    pub change_analysys_range: Option<u32>,
    pub change_application: Option<String>,
    pub numeric_value_info: Vec<NumericValueInfoResponse>,
    pub failure_priority: Option<Priority>,
    pub prediction_notify_relation_list: Option<Vec<NotifyRelation>>,
    pub change_notify_relation_list: Option<Vec<NotifyRelation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringValueInfoResponse {
    pub order_no: Option<u32>,
    pub priority: Option<Priority>,
    pub pattern: Option<String>,
    pub message: Option<String>,
    pub description: Option<String>,
    pub case_sensitivity_flg: Option<bool>,
    pub process_type: Option<bool>,
    pub valid_flg: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringResponseInfo {
    pub collector_flg: Option<bool>,
    pub log_format_id: Option<String>,
    pub string_value_info: Vec<StringValueInfoResponse>,
    pub priority_change_judgment_type: Option<PriorityChangeJudgmentType>,
    pub priority_change_failure_type: Option<PriorityChangeFailureType>,
}

/// Kind-agnostic view returned by `monitorsetting/monitor` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitorInfo {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    pub collector_flg: Option<bool>,
    pub prediction_flg: Option<bool>,
    pub change_flg: Option<bool>,
    pub item_name: Option<String>,
    pub measure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMonitorListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMonitorRequest {
    pub monitor_id_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorValidRequest {
    pub monitor_ids: Vec<String>,
    pub valid_flg: bool,
}

// Per-kind request and response records.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPingMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub ping_check_info: PingCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyPingMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping_check_info: Option<PingCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PingMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub ping_check_info: Option<PingCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHttpNumericMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub http_check_info: HttpCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyHttpNumericMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_check_info: Option<HttpCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpNumericMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub http_check_info: Option<HttpCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHttpStringMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    pub http_check_info: HttpCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyHttpStringMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_check_info: Option<HttpCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpStringMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub string: StringResponseInfo,
    pub http_check_info: Option<HttpCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSnmpMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub snmp_check_info: SnmpCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifySnmpMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_check_info: Option<SnmpCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnmpMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub snmp_check_info: Option<SnmpCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLogfileMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    pub logfile_check_info: LogfileCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyLogfileMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logfile_check_info: Option<LogfileCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogfileMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub string: StringResponseInfo,
    pub logfile_check_info: Option<LogfileCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSqlMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub sql_check_info: SqlCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifySqlMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_check_info: Option<SqlCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SqlMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub sql_check_info: Option<SqlCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddJmxMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub jmx_check_info: JmxCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyJmxMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jmx_check_info: Option<JmxCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JmxMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub jmx_check_info: Option<JmxCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProcessMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub process_check_info: ProcessCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyProcessMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_check_info: Option<ProcessCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub process_check_info: Option<ProcessCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPortMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub port_check_info: PortCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyPortMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_check_info: Option<PortCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub port_check_info: Option<PortCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWinEventMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    #[serde(rename = "wineventCheckInfo")]
    pub winevent_check_info: WinEventCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyWinEventMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub string: StringRequestInfo,
    #[serde(
        rename = "wineventCheckInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub winevent_check_info: Option<WinEventCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WinEventMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub string: StringResponseInfo,
    #[serde(rename = "wineventCheckInfo")]
    pub winevent_check_info: Option<WinEventCheckInfoResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomMonitorRequest {
    pub monitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    pub custom_check_info: CustomCheckInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCustomMonitorRequest {
    #[serde(flatten)]
    pub info: MonitorRequestInfo,
    #[serde(flatten)]
    pub numeric: NumericRequestInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_check_info: Option<CustomCheckInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomMonitorResponse {
    #[serde(flatten)]
    pub info: MonitorResponseInfo,
    #[serde(flatten)]
    pub numeric: NumericResponseInfo,
    pub custom_check_info: Option<CustomCheckInfoResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hinemos::models::common::ConvertFlag;
    use serde_json::json;

    fn sample_add_sql() -> AddSqlMonitorRequest {
        AddSqlMonitorRequest {
            monitor_id: "SQL_01".to_string(),
            owner_role_id: Some("ADMINISTRATORS".to_string()),
            info: MonitorRequestInfo {
                application: Some("Hinemos".to_string()),
                description: Some("orders backlog".to_string()),
                monitor_flg: Some(true),
                run_interval: Some(RunInterval::Min05),
                calendar_id: None,
                facility_id: Some("DB01".to_string()),
                notify_relation_list: Some(vec![NotifyRelation::new("MAIL_OPS")]),
            },
            numeric: NumericRequestInfo {
                collector_flg: Some(true),
                item_name: Some("SQL Value".to_string()),
                measure: Some("count".to_string()),
                numeric_value_info: Some(vec![NumericValueInfo {
                    monitor_numeric_type: MonitorNumericType::Basic,
                    priority: Priority::Warning,
                    threshold_lower_limit: Some(80.0),
                    threshold_upper_limit: Some(90.0),
                    message: None,
                }]),
                ..Default::default()
            },
            sql_check_info: SqlCheckInfo {
                connection_url: "jdbc:postgresql://db:5432/app".to_string(),
                user: "monitor".to_string(),
                password: "secret".to_string(),
                jdbc_driver: "org.postgresql.Driver".to_string(),
                query: "select count(*) from orders".to_string(),
                timeout: 5000,
            },
        }
    }

    #[test]
    fn add_request_uses_camel_case_and_omits_unset_fields() {
        let value = serde_json::to_value(sample_add_sql()).expect("serialize");

        assert_eq!(value["monitorId"], json!("SQL_01"));
        assert_eq!(value["runInterval"], json!("MIN_05"));
        assert_eq!(value["sqlCheckInfo"]["jdbcDriver"], json!("org.postgresql.Driver"));
        assert_eq!(value["numericValueInfo"][0]["monitorNumericType"], json!(""));
        assert_eq!(value["notifyRelationList"], json!([{"notifyId": "MAIL_OPS"}]));
        assert!(value.get("calendarId").is_none());
        assert!(value.get("predictionFlg").is_none());
        assert!(value["numericValueInfo"][0].get("message").is_none());
    }

    #[test]
    fn add_request_round_trips() {
        let request = sample_add_sql();
        let value = serde_json::to_value(&request).expect("serialize");
        let parsed: AddSqlMonitorRequest = serde_json::from_value(value).expect("parse");
        assert_eq!(parsed, request);
    }

    #[test]
    fn modify_request_round_trips_with_string_settings() {
        let request = ModifyWinEventMonitorRequest {
            info: MonitorRequestInfo {
                description: Some("app log".to_string()),
                ..Default::default()
            },
            string: StringRequestInfo {
                collector_flg: Some(false),
                string_value_info: Some(vec![StringValueInfo {
                    order_no: 1,
                    priority: Priority::Critical,
                    pattern: ".*fatal.*".to_string(),
                    message: Some("fatal".to_string()),
                    description: None,
                    case_sensitivity_flg: true,
                    process_type: true,
                    valid_flg: true,
                }]),
                priority_change_judgment_type: Some(PriorityChangeJudgmentType::NotPriorityChange),
                ..Default::default()
            },
            winevent_check_info: Some(WinEventCheckInfo {
                log_name: "Application".to_string(),
                source: None,
                level: Some(2),
                keywords: None,
            }),
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["wineventCheckInfo"]["logName"], json!("Application"));
        assert_eq!(value["priorityChangeJudgmentType"], json!("NOT_PRIORITY_CHANGE"));

        let parsed: ModifyWinEventMonitorRequest = serde_json::from_value(value).expect("parse");
        assert_eq!(parsed, request);
    }

    #[test]
    fn response_parses_flattened_sections_and_ignores_extras() {
        let response: HttpNumericMonitorResponse = serde_json::from_value(json!({
            "monitorId": "HTTP_01",
            "monitorTypeId": "MON_HTP_N",
            "monitorType": "NUMERIC",
            "facilityId": "WEB01",
            "runInterval": 300,
            "collectorFlg": true,
            "predictionFlg": false,
            "numericValueInfo": [
                {"priority": "INFO", "thresholdLowerLimit": 0, "thresholdUpperLimit": 1000},
                {"monitorNumericType": "CHANGE", "priority": "WARNING", "thresholdLowerLimit": -2.0, "thresholdUpperLimit": 2.0}
            ],
            "httpCheckInfo": {"requestUrl": "http://web01/", "timeout": 10000, "urlReplace": true},
            "regDate": "2026-01-01 00:00:00",
            "unmodelled": {"anything": [1, 2, 3]}
        }))
        .expect("permissive response");

        assert_eq!(response.info.monitor_id, "HTTP_01");
        assert_eq!(response.info.run_interval, Some(RunInterval::Min05));
        assert_eq!(response.info.monitor_type, Some(MonitorType::Numeric));
        assert_eq!(response.numeric.collector_flg, Some(true));
        assert_eq!(response.numeric.numeric_value_info.len(), 2);
        assert_eq!(response.numeric.numeric_value_info[0].monitor_numeric_type, None);
        assert_eq!(
            response.numeric.numeric_value_info[1].monitor_numeric_type,
            Some(MonitorNumericType::Change)
        );
        let check = response.http_check_info.expect("check info");
        assert_eq!(check.timeout, Some(10000));
    }

    #[test]
    fn response_with_unknown_enum_value_is_rejected() {
        let result = serde_json::from_value::<SnmpMonitorResponse>(json!({
            "monitorId": "SNMP_01",
            "snmpCheckInfo": {"snmpOid": ".1.3.6", "convertFlg": "SQUARE"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn sql_response_reads_statement_under_sql_key() {
        let response: SqlMonitorResponse = serde_json::from_value(json!({
            "monitorId": "SQL_01",
            "sqlCheckInfo": {"sql": "select 1", "timeout": 5000}
        }))
        .expect("sql response");
        assert_eq!(
            response.sql_check_info.and_then(|check| check.sql).as_deref(),
            Some("select 1")
        );
    }

    #[test]
    fn jmx_check_info_serializes_defaults() {
        let check = JmxCheckInfo {
            port: 9010,
            auth_user: None,
            auth_password: None,
            url: None,
            convert_flg: ConvertFlag::None,
            master_id: "JMX_MEMORY_HEAP_COMMITTED".to_string(),
            url_format_name: "Default".to_string(),
        };
        assert_eq!(
            serde_json::to_value(check).expect("serialize"),
            json!({
                "port": 9010,
                "convertFlg": "NONE",
                "masterId": "JMX_MEMORY_HEAP_COMMITTED",
                "urlFormatName": "Default"
            })
        );
    }

    #[test]
    fn monitor_kind_parses_tool_names() {
        assert_eq!("http_numeric".parse::<MonitorKind>(), Ok(MonitorKind::HttpNumeric));
        assert_eq!("PORT".parse::<MonitorKind>(), Ok(MonitorKind::Port));
        assert!("smtp".parse::<MonitorKind>().is_err());
        assert_eq!(MonitorKind::Port.path(), "serviceport");
        assert!(!MonitorKind::Logfile.is_numeric());
    }

    #[test]
    fn generic_monitor_info_reads_prediction_flag() {
        let info: MonitorInfo = serde_json::from_value(json!({
            "monitorId": "PING_01",
            "monitorTypeId": "MON_PNG_N",
            "predictionFlg": true,
            "collectorFlg": true
        }))
        .expect("monitor info");
        assert_eq!(info.info.monitor_id, "PING_01");
        assert_eq!(info.prediction_flg, Some(true));
    }
}
