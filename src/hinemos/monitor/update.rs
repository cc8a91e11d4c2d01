//! Patch types and the merges that turn a stored monitor plus a patch into a
//! complete modify request.
//!
//! The manager replaces the whole setting on modify, so every merge starts
//! from the full stored record and only overrides what the patch sets. The
//! check info is always rebuilt and sent.

use crate::hinemos::client::validate_id;
use crate::hinemos::error::HinemosError;
use crate::hinemos::models::*;

use super::builders::{
    notify_relations, required_text, required_value, string_values, PatternRule,
    CUSTOM_TIMEOUT_MS, DEFAULT_ENCODING, DEFAULT_JMX_MASTER, DEFAULT_JMX_URL_FORMAT,
    DEFAULT_MAX_BYTES, DEFAULT_PROCESS_COMMAND, DEFAULT_RETURN_CODE, HTTP_TIMEOUT_MS,
    PING_TIMEOUT_MS, PORT_TIMEOUT_MS, SQL_TIMEOUT_MS,
};
use super::thresholds::{self, ThresholdRule};

const PROBE_INTERVAL_MS: u32 = 1000;

/// Changes common to every monitor kind plus the kind's own check changes.
/// `thresholds` only applies to numeric kinds and `patterns` only to string
/// kinds.
#[derive(Debug, Clone, Default)]
pub struct MonitorPatch<C> {
    pub description: Option<String>,
    pub run_interval: Option<RunInterval>,
    pub monitor_enabled: Option<bool>,
    pub application: Option<String>,
    pub calendar_id: Option<String>,
    pub facility_id: Option<String>,
    pub notify_ids: Option<Vec<String>>,
    pub collector_enabled: Option<bool>,
    pub thresholds: Option<Vec<ThresholdRule>>,
    pub patterns: Option<Vec<PatternRule>>,
    pub check: C,
}

#[derive(Debug, Clone, Default)]
pub struct PingCheckPatch {
    pub run_count: Option<u32>,
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct HttpCheckPatch {
    pub url: Option<String>,
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SnmpCheckPatch {
    pub oid: Option<String>,
    pub convert_flg: Option<ConvertFlag>,
}

#[derive(Debug, Clone, Default)]
pub struct LogfileCheckPatch {
    pub directory: Option<String>,
    pub filename: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SqlCheckPatch {
    pub connection_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub jdbc_driver: Option<String>,
    pub sql: Option<String>,
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct JmxCheckPatch {
    pub port: Option<u16>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub url: Option<String>,
    pub convert_flg: Option<ConvertFlag>,
    pub master_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessCheckPatch {
    pub param: Option<String>,
    pub command: Option<String>,
    pub case_sensitive: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct PortCheckPatch {
    pub port_no: Option<u16>,
    pub service_id: Option<String>,
    pub timeout: Option<u32>,
    pub run_count: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct WinEventCheckPatch {
    pub log_name: Option<String>,
    pub source: Option<String>,
    pub level: Option<i32>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomCheckPatch {
    pub command: Option<String>,
    pub timeout: Option<u32>,
    pub spec_flg: Option<bool>,
    pub convert_flg: Option<ConvertFlag>,
}

pub type PingMonitorPatch = MonitorPatch<PingCheckPatch>;
pub type HttpNumericMonitorPatch = MonitorPatch<HttpCheckPatch>;
pub type HttpStringMonitorPatch = MonitorPatch<HttpCheckPatch>;
pub type SnmpMonitorPatch = MonitorPatch<SnmpCheckPatch>;
pub type LogfileMonitorPatch = MonitorPatch<LogfileCheckPatch>;
pub type SqlMonitorPatch = MonitorPatch<SqlCheckPatch>;
pub type JmxMonitorPatch = MonitorPatch<JmxCheckPatch>;
pub type ProcessMonitorPatch = MonitorPatch<ProcessCheckPatch>;
pub type PortMonitorPatch = MonitorPatch<PortCheckPatch>;
pub type WinEventMonitorPatch = MonitorPatch<WinEventCheckPatch>;
pub type CustomMonitorPatch = MonitorPatch<CustomCheckPatch>;

fn stored_relations(relations: &Option<Vec<NotifyRelation>>) -> Vec<NotifyRelation> {
    relations
        .iter()
        .flatten()
        .map(|relation| NotifyRelation::new(relation.notify_id.clone()))
        .collect()
}

fn merge_info<C>(
    current: &MonitorResponseInfo,
    patch: &MonitorPatch<C>,
) -> Result<MonitorRequestInfo, HinemosError> {
    let facility_id = match patch.facility_id.as_deref() {
        Some(facility_id) => Some(validate_id("facility_id", facility_id)?.to_string()),
        None => current.facility_id.clone(),
    };
    let notify_relation_list = match &patch.notify_ids {
        Some(ids) => notify_relations(ids),
        None => stored_relations(&current.notify_relation_list),
    };

    Ok(MonitorRequestInfo {
        application: patch
            .application
            .clone()
            .or_else(|| current.application.clone()),
        description: patch
            .description
            .clone()
            .or_else(|| current.description.clone()),
        monitor_flg: patch.monitor_enabled.or(current.monitor_flg),
        run_interval: patch.run_interval.or(current.run_interval),
        calendar_id: patch
            .calendar_id
            .clone()
            .or_else(|| current.calendar_id.clone()),
        facility_id,
        notify_relation_list: Some(notify_relation_list),
    })
}

fn merge_numeric<C>(
    current: &NumericResponseInfo,
    patch: &MonitorPatch<C>,
) -> Result<NumericRequestInfo, HinemosError> {
    let numeric_value_info = match &patch.thresholds {
        Some(rules) => thresholds::from_rules(rules)?,
        None => thresholds::from_response(&current.numeric_value_info)?,
    };

    Ok(NumericRequestInfo {
        collector_flg: patch.collector_enabled.or(current.collector_flg),
        item_name: current.item_name.clone(),
        measure: current.measure.clone(),
        prediction_flg: current.prediction_flg,
        prediction_method: current.prediction_method,
        prediction_analysys_range: current.prediction_analysys_range,
        prediction_target: current.prediction_target,
        prediction_application: current.prediction_application.clone(),
        change_flg: current.change_flg,
        change_analysys_range: current.change_analysys_range,
        change_application: current.change_application.clone(),
        numeric_value_info: Some(numeric_value_info),
        failure_priority: current.failure_priority,
        prediction_notify_relation_list: Some(stored_relations(
            &current.prediction_notify_relation_list,
        )),
        change_notify_relation_list: Some(stored_relations(&current.change_notify_relation_list)),
    })
}

/// Stored rules in evaluation order, renumbered from 1. Rules missing a
/// pattern or priority cannot be resubmitted and are dropped.
fn stored_patterns(rules: &[StringValueInfoResponse]) -> Vec<StringValueInfo> {
    let mut ordered: Vec<&StringValueInfoResponse> = rules.iter().collect();
    ordered.sort_by_key(|rule| rule.order_no.unwrap_or(u32::MAX));

    ordered
        .into_iter()
        .filter_map(|rule| Some((rule.pattern.clone()?, rule.priority?, rule)))
        .enumerate()
        .map(|(index, (pattern, priority, rule))| StringValueInfo {
            order_no: index as u32 + 1,
            priority,
            pattern,
            message: rule.message.clone(),
            description: rule.description.clone(),
            case_sensitivity_flg: rule.case_sensitivity_flg.unwrap_or(true),
            process_type: rule.process_type.unwrap_or(true),
            valid_flg: rule.valid_flg.unwrap_or(true),
        })
        .collect()
}

fn merge_string<C>(
    current: &StringResponseInfo,
    patch: &MonitorPatch<C>,
) -> Result<StringRequestInfo, HinemosError> {
    let string_value_info = match &patch.patterns {
        Some(rules) => string_values(rules)?,
        None => stored_patterns(&current.string_value_info),
    };

    Ok(StringRequestInfo {
        collector_flg: patch.collector_enabled.or(current.collector_flg),
        log_format_id: current.log_format_id.clone(),
        string_value_info: Some(string_value_info),
        priority_change_judgment_type: Some(
            current
                .priority_change_judgment_type
                .unwrap_or(PriorityChangeJudgmentType::NotPriorityChange),
        ),
        priority_change_failure_type: current.priority_change_failure_type,
    })
}

fn merge_http_check(
    current: Option<&HttpCheckInfoResponse>,
    patch: HttpCheckPatch,
    kind: MonitorKind,
) -> Result<HttpCheckInfo, HinemosError> {
    let current = current.cloned().unwrap_or_default();
    let request_url = required_text(
        patch.url.as_deref().or(current.request_url.as_deref()),
        "url",
        kind,
    )?;

    Ok(HttpCheckInfo {
        request_url,
        timeout: patch.timeout.or(current.timeout).unwrap_or(HTTP_TIMEOUT_MS),
        user_agent: current.user_agent,
        connect_timeout: current.connect_timeout,
        request_method: current.request_method.or_else(|| Some("GET".to_string())),
        post_data: current.post_data,
        auth_type: current.auth_type,
        auth_user: current.auth_user,
        auth_password: current.auth_password,
        proxy_flg: current.proxy_flg.unwrap_or(false),
        proxy_url: current.proxy_url,
        proxy_port: current.proxy_port,
        proxy_user: current.proxy_user,
        proxy_password: current.proxy_password,
    })
}

pub fn merge_ping(
    current: &PingMonitorResponse,
    patch: PingMonitorPatch,
) -> Result<ModifyPingMonitorRequest, HinemosError> {
    let stored = current.ping_check_info.clone().unwrap_or_default();

    Ok(ModifyPingMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        ping_check_info: Some(PingCheckInfo {
            run_count: patch.check.run_count.or(stored.run_count).unwrap_or(1),
            run_interval: stored.run_interval.unwrap_or(PROBE_INTERVAL_MS),
            timeout: patch.check.timeout.or(stored.timeout).unwrap_or(PING_TIMEOUT_MS),
        }),
    })
}

pub fn merge_http_numeric(
    current: &HttpNumericMonitorResponse,
    patch: HttpNumericMonitorPatch,
) -> Result<ModifyHttpNumericMonitorRequest, HinemosError> {
    Ok(ModifyHttpNumericMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        http_check_info: Some(merge_http_check(
            current.http_check_info.as_ref(),
            patch.check,
            MonitorKind::HttpNumeric,
        )?),
    })
}

pub fn merge_http_string(
    current: &HttpStringMonitorResponse,
    patch: HttpStringMonitorPatch,
) -> Result<ModifyHttpStringMonitorRequest, HinemosError> {
    let mut string = merge_string(&current.string, &patch)?;
    string.priority_change_failure_type = Some(
        string
            .priority_change_failure_type
            .unwrap_or(PriorityChangeFailureType::NotPriorityChange),
    );

    Ok(ModifyHttpStringMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        string,
        http_check_info: Some(merge_http_check(
            current.http_check_info.as_ref(),
            patch.check,
            MonitorKind::HttpString,
        )?),
    })
}

pub fn merge_snmp(
    current: &SnmpMonitorResponse,
    patch: SnmpMonitorPatch,
) -> Result<ModifySnmpMonitorRequest, HinemosError> {
    let stored = current.snmp_check_info.clone().unwrap_or_default();
    let snmp_oid = required_text(
        patch.check.oid.as_deref().or(stored.snmp_oid.as_deref()),
        "oid",
        MonitorKind::Snmp,
    )?;

    Ok(ModifySnmpMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        snmp_check_info: Some(SnmpCheckInfo {
            snmp_oid,
            convert_flg: patch
                .check
                .convert_flg
                .or(stored.convert_flg)
                .unwrap_or(ConvertFlag::None),
        }),
    })
}

pub fn merge_logfile(
    current: &LogfileMonitorResponse,
    patch: LogfileMonitorPatch,
) -> Result<ModifyLogfileMonitorRequest, HinemosError> {
    let kind = MonitorKind::Logfile;
    let stored = current.logfile_check_info.clone().unwrap_or_default();
    let directory = required_text(
        patch.check.directory.as_deref().or(stored.directory.as_deref()),
        "directory",
        kind,
    )?;
    let file_name = required_text(
        patch.check.filename.as_deref().or(stored.file_name.as_deref()),
        "filename",
        kind,
    )?;

    Ok(ModifyLogfileMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        string: merge_string(&current.string, &patch)?,
        logfile_check_info: Some(LogfileCheckInfo {
            directory,
            file_name,
            file_encoding: patch
                .check
                .encoding
                .or(stored.file_encoding)
                .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
            file_return_code: stored
                .file_return_code
                .unwrap_or_else(|| DEFAULT_RETURN_CODE.to_string()),
            pattern_head: stored.pattern_head,
            pattern_tail: stored.pattern_tail,
            max_bytes: stored.max_bytes.unwrap_or(DEFAULT_MAX_BYTES),
        }),
    })
}

pub fn merge_sql(
    current: &SqlMonitorResponse,
    patch: SqlMonitorPatch,
) -> Result<ModifySqlMonitorRequest, HinemosError> {
    let kind = MonitorKind::Sql;
    let stored = current.sql_check_info.clone().unwrap_or_default();
    let check = &patch.check;

    let sql_check_info = SqlCheckInfo {
        connection_url: required_text(
            check.connection_url.as_deref().or(stored.connection_url.as_deref()),
            "connection_url",
            kind,
        )?,
        user: required_text(check.user.as_deref().or(stored.user.as_deref()), "user", kind)?,
        password: required_text(
            check.password.as_deref().or(stored.password.as_deref()),
            "password",
            kind,
        )?,
        jdbc_driver: required_text(
            check.jdbc_driver.as_deref().or(stored.jdbc_driver.as_deref()),
            "jdbc_driver",
            kind,
        )?,
        query: required_text(check.sql.as_deref().or(stored.sql.as_deref()), "sql", kind)?,
        timeout: check.timeout.or(stored.timeout).unwrap_or(SQL_TIMEOUT_MS),
    };

    Ok(ModifySqlMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        sql_check_info: Some(sql_check_info),
    })
}

pub fn merge_jmx(
    current: &JmxMonitorResponse,
    patch: JmxMonitorPatch,
) -> Result<ModifyJmxMonitorRequest, HinemosError> {
    let stored = current.jmx_check_info.clone().unwrap_or_default();
    let port = required_value(patch.check.port.or(stored.port), "port", MonitorKind::Jmx)?;

    Ok(ModifyJmxMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        jmx_check_info: Some(JmxCheckInfo {
            port,
            auth_user: patch.check.auth_user.or(stored.auth_user),
            auth_password: patch.check.auth_password.or(stored.auth_password),
            url: patch.check.url.or(stored.url),
            convert_flg: patch
                .check
                .convert_flg
                .or(stored.convert_flg)
                .unwrap_or(ConvertFlag::None),
            master_id: patch
                .check
                .master_id
                .or(stored.master_id)
                .unwrap_or_else(|| DEFAULT_JMX_MASTER.to_string()),
            url_format_name: stored
                .url_format_name
                .unwrap_or_else(|| DEFAULT_JMX_URL_FORMAT.to_string()),
        }),
    })
}

pub fn merge_process(
    current: &ProcessMonitorResponse,
    patch: ProcessMonitorPatch,
) -> Result<ModifyProcessMonitorRequest, HinemosError> {
    let stored = current.process_check_info.clone().unwrap_or_default();
    let param = required_text(
        patch.check.param.as_deref().or(stored.param.as_deref()),
        "param",
        MonitorKind::Process,
    )?;

    Ok(ModifyProcessMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        process_check_info: Some(ProcessCheckInfo {
            param,
            case_sensitivity_flg: patch
                .check
                .case_sensitive
                .or(stored.case_sensitivity_flg)
                .unwrap_or(true),
            command: patch
                .check
                .command
                .or(stored.command)
                .unwrap_or_else(|| DEFAULT_PROCESS_COMMAND.to_string()),
        }),
    })
}

pub fn merge_port(
    current: &PortMonitorResponse,
    patch: PortMonitorPatch,
) -> Result<ModifyPortMonitorRequest, HinemosError> {
    let stored = current.port_check_info.clone().unwrap_or_default();
    let port_no = required_value(
        patch.check.port_no.or(stored.port_no),
        "port_no",
        MonitorKind::Port,
    )?;

    Ok(ModifyPortMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        port_check_info: Some(PortCheckInfo {
            port_no,
            service_id: patch.check.service_id.or(stored.service_id),
            timeout: patch.check.timeout.or(stored.timeout).unwrap_or(PORT_TIMEOUT_MS),
            run_count: patch.check.run_count.or(stored.run_count).unwrap_or(1),
            run_interval: stored.run_interval.unwrap_or(PROBE_INTERVAL_MS),
        }),
    })
}

pub fn merge_winevent(
    current: &WinEventMonitorResponse,
    patch: WinEventMonitorPatch,
) -> Result<ModifyWinEventMonitorRequest, HinemosError> {
    let stored = current.winevent_check_info.clone().unwrap_or_default();
    let log_name = required_text(
        patch.check.log_name.as_deref().or(stored.log_name.as_deref()),
        "log_name",
        MonitorKind::WinEvent,
    )?;

    Ok(ModifyWinEventMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        string: merge_string(&current.string, &patch)?,
        winevent_check_info: Some(WinEventCheckInfo {
            log_name,
            source: patch.check.source.or(stored.source),
            level: patch.check.level.or(stored.level),
            keywords: patch.check.keywords.or(stored.keywords),
        }),
    })
}

pub fn merge_custom(
    current: &CustomMonitorResponse,
    patch: CustomMonitorPatch,
) -> Result<ModifyCustomMonitorRequest, HinemosError> {
    let stored = current.custom_check_info.clone().unwrap_or_default();
    let command = required_text(
        patch.check.command.as_deref().or(stored.command.as_deref()),
        "command",
        MonitorKind::Custom,
    )?;

    Ok(ModifyCustomMonitorRequest {
        info: merge_info(&current.info, &patch)?,
        numeric: merge_numeric(&current.numeric, &patch)?,
        custom_check_info: Some(CustomCheckInfo {
            command,
            timeout: patch.check.timeout.or(stored.timeout).unwrap_or(CUSTOM_TIMEOUT_MS),
            spec_flg: patch.check.spec_flg.or(stored.spec_flg).unwrap_or(false),
            convert_flg: patch
                .check
                .convert_flg
                .or(stored.convert_flg)
                .unwrap_or(ConvertFlag::None),
        }),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stored_http_numeric() -> HttpNumericMonitorResponse {
        serde_json::from_value(json!({
            "monitorId": "X",
            "application": "Web",
            "description": "frontend latency",
            "monitorFlg": true,
            "runInterval": "MIN_01",
            "facilityId": "NODE01",
            "notifyRelationList": [{"notifyId": "MAIL01", "notifyType": "MAIL"}],
            "ownerRoleId": "ADMINISTRATORS",
            "regDate": "2024-01-01 00:00:00",
            "collectorFlg": true,
            "itemName": "Response Time",
            "measure": "msec",
            "predictionFlg": false,
            "predictionMethod": "POLYNOMIAL_1",
            "predictionAnalysysRange": 60,
            "predictionTarget": 60,
            "changeFlg": false,
            "changeAnalysysRange": 60,
            "failurePriority": "UNKNOWN",
            "numericValueInfo": [
                {"monitorNumericType": "", "priority": "INFO", "thresholdLowerLimit": 0.0, "thresholdUpperLimit": 1000.0},
                {"priority": "WARNING", "thresholdLowerLimit": -2.0, "thresholdUpperLimit": 2.0}
            ],
            "httpCheckInfo": {
                "requestUrl": "http://old",
                "timeout": 10000,
                "requestMethod": "GET",
                "proxyFlg": false
            }
        }))
        .expect("stored monitor")
    }

    #[test]
    fn http_numeric_merge_keeps_unspecified_fields() {
        let request = merge_http_numeric(
            &stored_http_numeric(),
            HttpNumericMonitorPatch {
                check: HttpCheckPatch {
                    url: Some("http://new".to_string()),
                    timeout: None,
                },
                ..Default::default()
            },
        )
        .expect("merge");

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["httpCheckInfo"]["requestUrl"], json!("http://new"));
        assert_eq!(value["httpCheckInfo"]["timeout"], json!(10000));
        assert_eq!(value["application"], json!("Web"));
        assert_eq!(value["runInterval"], json!("MIN_01"));
        assert_eq!(value["itemName"], json!("Response Time"));
        assert_eq!(value["notifyRelationList"], json!([{"notifyId": "MAIL01"}]));
        assert!(value.get("regDate").is_none());
        assert!(value.get("monitorId").is_none());
    }

    #[test]
    fn unclassified_stored_rules_use_inference() {
        let request = merge_http_numeric(&stored_http_numeric(), Default::default()).expect("merge");
        let rules = request.numeric.numeric_value_info.expect("rules");

        assert_eq!(rules[0].monitor_numeric_type, MonitorNumericType::Basic);
        assert_eq!(rules[1].monitor_numeric_type, MonitorNumericType::Change);
    }

    #[test]
    fn patch_overrides_common_fields() {
        let request = merge_http_numeric(
            &stored_http_numeric(),
            HttpNumericMonitorPatch {
                description: Some("edge latency".to_string()),
                run_interval: Some(RunInterval::Min10),
                monitor_enabled: Some(false),
                notify_ids: Some(Vec::new()),
                ..Default::default()
            },
        )
        .expect("merge");

        assert_eq!(request.info.description.as_deref(), Some("edge latency"));
        assert_eq!(request.info.run_interval, Some(RunInterval::Min10));
        assert_eq!(request.info.monitor_flg, Some(false));
        assert_eq!(request.info.notify_relation_list, Some(Vec::new()));
    }

    #[test]
    fn missing_check_info_requires_parameter() {
        let mut stored = stored_http_numeric();
        stored.http_check_info = None;

        let err = merge_http_numeric(&stored, Default::default()).expect_err("no url");
        assert_eq!(
            err.to_string(),
            "'url' parameter is required for HTTP numeric monitors"
        );
    }

    #[test]
    fn stored_patterns_are_renumbered_in_order() {
        let stored: LogfileMonitorResponse = serde_json::from_value(json!({
            "monitorId": "LOG_01",
            "facilityId": "NODE01",
            "stringValueInfo": [
                {"orderNo": 5, "priority": "WARNING", "pattern": ".*WARN.*", "validFlg": false},
                {"orderNo": 2, "priority": "CRITICAL", "pattern": ".*FATAL.*"},
                {"orderNo": 3, "pattern": ".*orphan.*"}
            ],
            "logfileCheckInfo": {"directory": "/var/log", "fileName": "app.log"}
        }))
        .expect("stored logfile");

        let request = merge_logfile(&stored, Default::default()).expect("merge");
        let rules = request.string.string_value_info.expect("rules");
        assert_eq!(rules.len(), 2);
        assert_eq!((rules[0].order_no, rules[0].pattern.as_str()), (1, ".*FATAL.*"));
        assert_eq!((rules[1].order_no, rules[1].pattern.as_str()), (2, ".*WARN.*"));
        assert!(!rules[1].valid_flg);

        let check = request.logfile_check_info.expect("check");
        assert_eq!(check.file_encoding, "UTF-8");
        assert_eq!(check.max_bytes, 131072);
    }

    #[test]
    fn sql_merge_reads_statement_from_stored_record() {
        let stored: SqlMonitorResponse = serde_json::from_value(json!({
            "monitorId": "SQL_01",
            "sqlCheckInfo": {
                "connectionUrl": "jdbc:postgresql://db/app",
                "user": "monitor",
                "password": "secret",
                "jdbcDriver": "org.postgresql.Driver",
                "sql": "SELECT 1",
                "timeout": 7000
            }
        }))
        .expect("stored sql");

        let request = merge_sql(
            &stored,
            SqlMonitorPatch {
                check: SqlCheckPatch {
                    sql: Some("SELECT 2".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .expect("merge");

        let check = request.sql_check_info.expect("check");
        assert_eq!(check.query, "SELECT 2");
        assert_eq!(check.timeout, 7000);
        assert_eq!(check.user, "monitor");
    }
}
