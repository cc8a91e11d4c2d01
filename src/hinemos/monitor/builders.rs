//! Assembly of complete create requests from caller arguments.
//!
//! Every `build_*` function validates its required parameters before
//! producing a request, so a rejected call never reaches the network.

use crate::hinemos::client::validate_id;
use crate::hinemos::error::HinemosError;
use crate::hinemos::models::*;

use super::thresholds::{
    self, level_defaults, process_defaults, ThresholdRow, ThresholdRule, DEFAULT_CRITICAL_LEVEL,
    DEFAULT_MAX_PROCESSES, DEFAULT_MIN_PROCESSES, DEFAULT_WARNING_LEVEL, HTTP_DEFAULTS,
    PING_DEFAULTS, SNMP_DEFAULTS,
};

pub const DEFAULT_APPLICATION: &str = "Hinemos";
pub const DEFAULT_OWNER_ROLE: &str = "ADMINISTRATORS";
pub const DEFAULT_RUN_INTERVAL: RunInterval = RunInterval::Min05;

const ANALYSIS_RANGE: u32 = 60;
/// Gap between probes inside one ping or port check, in milliseconds.
const PROBE_INTERVAL_MS: u32 = 1000;

pub const PING_TIMEOUT_MS: u32 = 5000;
pub const HTTP_TIMEOUT_MS: u32 = 10000;
pub const SQL_TIMEOUT_MS: u32 = 5000;
pub const PORT_TIMEOUT_MS: u32 = 5000;
pub const CUSTOM_TIMEOUT_MS: u32 = 30000;

pub const DEFAULT_ENCODING: &str = "UTF-8";
pub const DEFAULT_RETURN_CODE: &str = "LF";
pub const DEFAULT_MAX_BYTES: u32 = 131072;
pub const DEFAULT_JMX_MASTER: &str = "JMX_MEMORY_HEAP_COMMITTED";
pub const DEFAULT_JMX_URL_FORMAT: &str = "Default";
pub const DEFAULT_PROCESS_COMMAND: &str = "ps";

/// One string-matching rule. Orders are assigned from list position.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRule {
    pub pattern: String,
    pub priority: Priority,
    pub message: Option<String>,
    pub description: Option<String>,
    pub case_sensitive: bool,
    pub process_type: bool,
    pub valid: bool,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, priority: Priority, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            priority,
            message: Some(message.into()),
            description: None,
            case_sensitive: true,
            process_type: true,
            valid: true,
        }
    }

    pub fn default_error() -> Self {
        Self::new(".*error.*", Priority::Critical, "Error pattern found")
    }

    pub fn default_winevent() -> Self {
        Self::new(".*", Priority::Warning, "Windows event detected")
    }
}

/// Everything a caller can say about a new monitor. Fields that do not apply
/// to the requested kind are ignored.
#[derive(Debug, Clone, Default)]
pub struct CreateMonitorArgs {
    pub monitor_id: String,
    pub facility_id: String,
    pub description: Option<String>,
    pub application: Option<String>,
    pub owner_role_id: Option<String>,
    pub calendar_id: Option<String>,
    pub run_interval: Option<RunInterval>,
    pub notify_ids: Vec<String>,
    pub thresholds: Vec<ThresholdRule>,
    pub patterns: Vec<PatternRule>,
    pub collector_enabled: Option<bool>,
    pub prediction_enabled: Option<bool>,
    pub change_enabled: Option<bool>,
    pub item_name: Option<String>,
    pub measure: Option<String>,
    pub run_count: Option<u32>,
    pub timeout: Option<u32>,
    pub url: Option<String>,
    pub oid: Option<String>,
    pub convert_flg: Option<ConvertFlag>,
    pub directory: Option<String>,
    pub filename: Option<String>,
    pub encoding: Option<String>,
    pub connection_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub jdbc_driver: Option<String>,
    pub sql: Option<String>,
    pub port: Option<u16>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub master_id: Option<String>,
    pub param: Option<String>,
    pub command: Option<String>,
    pub case_sensitive: Option<bool>,
    pub min_count: Option<f64>,
    pub max_count: Option<f64>,
    pub port_no: Option<u16>,
    pub service_id: Option<String>,
    pub log_name: Option<String>,
    pub source: Option<String>,
    pub level: Option<i32>,
    pub keywords: Option<String>,
    pub spec_flg: Option<bool>,
    pub warning_threshold: Option<f64>,
    pub critical_threshold: Option<f64>,
}

pub(crate) fn required_text(
    value: Option<&str>,
    name: &str,
    kind: MonitorKind,
) -> Result<String, HinemosError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.to_string()),
        None => Err(HinemosError::missing_parameter(name, kind.label())),
    }
}

pub(crate) fn required_value<T>(
    value: Option<T>,
    name: &str,
    kind: MonitorKind,
) -> Result<T, HinemosError> {
    value.ok_or_else(|| HinemosError::missing_parameter(name, kind.label()))
}

fn identity(args: &CreateMonitorArgs, kind: MonitorKind) -> Result<(String, String), HinemosError> {
    let monitor_id = required_text(Some(args.monitor_id.as_str()), "monitor_id", kind)?;
    let facility_id = required_text(Some(args.facility_id.as_str()), "facility_id", kind)?;
    Ok((
        validate_id("monitor_id", &monitor_id)?.to_string(),
        validate_id("facility_id", &facility_id)?.to_string(),
    ))
}

pub(crate) fn notify_relations(ids: &[String]) -> Vec<NotifyRelation> {
    ids.iter().map(NotifyRelation::new).collect()
}

fn base_info(args: &CreateMonitorArgs, facility_id: String) -> MonitorRequestInfo {
    MonitorRequestInfo {
        application: Some(application(args)),
        description: Some(args.description.clone().unwrap_or_default()),
        monitor_flg: Some(true),
        run_interval: Some(args.run_interval.unwrap_or(DEFAULT_RUN_INTERVAL)),
        calendar_id: args.calendar_id.clone(),
        facility_id: Some(facility_id),
        notify_relation_list: Some(notify_relations(&args.notify_ids)),
    }
}

fn application(args: &CreateMonitorArgs) -> String {
    args.application
        .clone()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APPLICATION.to_string())
}

fn owner_role(args: &CreateMonitorArgs) -> Option<String> {
    Some(
        args.owner_role_id
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER_ROLE.to_string()),
    )
}

fn numeric_settings(
    args: &CreateMonitorArgs,
    item_name: &str,
    measure: &str,
    defaults: &[ThresholdRow],
) -> Result<NumericRequestInfo, HinemosError> {
    let values = if args.thresholds.is_empty() {
        thresholds::to_values(defaults)
    } else {
        thresholds::from_rules(&args.thresholds)?
    };
    let application = application(args);

    Ok(NumericRequestInfo {
        collector_flg: Some(args.collector_enabled.unwrap_or(true)),
        item_name: Some(args.item_name.clone().unwrap_or_else(|| item_name.to_string())),
        measure: Some(args.measure.clone().unwrap_or_else(|| measure.to_string())),
        prediction_flg: Some(args.prediction_enabled.unwrap_or(false)),
        prediction_method: Some(PredictionMethod::Polynomial1),
        prediction_analysys_range: Some(ANALYSIS_RANGE),
        prediction_target: Some(ANALYSIS_RANGE),
        prediction_application: Some(application.clone()),
        change_flg: Some(args.change_enabled.unwrap_or(false)),
        change_analysys_range: Some(ANALYSIS_RANGE),
        change_application: Some(application),
        numeric_value_info: Some(values),
        failure_priority: Some(Priority::Unknown),
        prediction_notify_relation_list: Some(Vec::new()),
        change_notify_relation_list: Some(Vec::new()),
    })
}

pub(crate) fn string_values(rules: &[PatternRule]) -> Result<Vec<StringValueInfo>, HinemosError> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            if rule.pattern.trim().is_empty() {
                return Err(HinemosError::validation("pattern must not be empty"));
            }
            Ok(StringValueInfo {
                order_no: index as u32 + 1,
                priority: rule.priority,
                pattern: rule.pattern.clone(),
                message: Some(rule.message.clone().unwrap_or_default()),
                description: Some(rule.description.clone().unwrap_or_default()),
                case_sensitivity_flg: rule.case_sensitive,
                process_type: rule.process_type,
                valid_flg: rule.valid,
            })
        })
        .collect()
}

fn string_settings(
    args: &CreateMonitorArgs,
    fallback: PatternRule,
) -> Result<StringRequestInfo, HinemosError> {
    let rules = if args.patterns.is_empty() {
        vec![fallback]
    } else {
        args.patterns.clone()
    };

    Ok(StringRequestInfo {
        collector_flg: Some(args.collector_enabled.unwrap_or(false)),
        log_format_id: None,
        string_value_info: Some(string_values(&rules)?),
        priority_change_judgment_type: Some(PriorityChangeJudgmentType::NotPriorityChange),
        priority_change_failure_type: None,
    })
}

fn level_table(args: &CreateMonitorArgs) -> Result<[ThresholdRow; 8], HinemosError> {
    let warning = args.warning_threshold.unwrap_or(DEFAULT_WARNING_LEVEL);
    let critical = args.critical_threshold.unwrap_or(DEFAULT_CRITICAL_LEVEL);
    if warning >= critical {
        return Err(HinemosError::validation(format!(
            "warning_threshold ({warning}) must be below critical_threshold ({critical})"
        )));
    }
    Ok(level_defaults(warning, critical))
}

fn http_check(url: String, timeout: Option<u32>) -> HttpCheckInfo {
    HttpCheckInfo {
        request_url: url,
        timeout: timeout.unwrap_or(HTTP_TIMEOUT_MS),
        user_agent: None,
        connect_timeout: None,
        request_method: Some("GET".to_string()),
        post_data: None,
        auth_type: None,
        auth_user: None,
        auth_password: None,
        proxy_flg: false,
        proxy_url: None,
        proxy_port: None,
        proxy_user: None,
        proxy_password: None,
    }
}

pub fn build_ping(args: &CreateMonitorArgs) -> Result<AddPingMonitorRequest, HinemosError> {
    let kind = MonitorKind::Ping;
    let (monitor_id, facility_id) = identity(args, kind)?;

    Ok(AddPingMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "Response Time", "msec", &PING_DEFAULTS)?,
        ping_check_info: PingCheckInfo {
            run_count: args.run_count.unwrap_or(1),
            run_interval: PROBE_INTERVAL_MS,
            timeout: args.timeout.unwrap_or(PING_TIMEOUT_MS),
        },
    })
}

pub fn build_http_numeric(
    args: &CreateMonitorArgs,
) -> Result<AddHttpNumericMonitorRequest, HinemosError> {
    let kind = MonitorKind::HttpNumeric;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let url = required_text(args.url.as_deref(), "url", kind)?;

    Ok(AddHttpNumericMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "Response Time", "msec", &HTTP_DEFAULTS)?,
        http_check_info: http_check(url, args.timeout),
    })
}

pub fn build_http_string(
    args: &CreateMonitorArgs,
) -> Result<AddHttpStringMonitorRequest, HinemosError> {
    let kind = MonitorKind::HttpString;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let url = required_text(args.url.as_deref(), "url", kind)?;

    let mut string = string_settings(args, PatternRule::default_error())?;
    string.priority_change_failure_type = Some(PriorityChangeFailureType::NotPriorityChange);

    Ok(AddHttpStringMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        string,
        http_check_info: http_check(url, args.timeout),
    })
}

pub fn build_snmp(args: &CreateMonitorArgs) -> Result<AddSnmpMonitorRequest, HinemosError> {
    let kind = MonitorKind::Snmp;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let oid = required_text(args.oid.as_deref(), "oid", kind)?;

    Ok(AddSnmpMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "SNMP Value", "count", &SNMP_DEFAULTS)?,
        snmp_check_info: SnmpCheckInfo {
            snmp_oid: oid,
            convert_flg: args.convert_flg.unwrap_or(ConvertFlag::None),
        },
    })
}

pub fn build_logfile(args: &CreateMonitorArgs) -> Result<AddLogfileMonitorRequest, HinemosError> {
    let kind = MonitorKind::Logfile;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let directory = required_text(args.directory.as_deref(), "directory", kind)?;
    let filename = required_text(args.filename.as_deref(), "filename", kind)?;

    Ok(AddLogfileMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        string: string_settings(args, PatternRule::default_error())?,
        logfile_check_info: LogfileCheckInfo {
            directory,
            file_name: filename,
            file_encoding: args
                .encoding
                .clone()
                .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
            file_return_code: DEFAULT_RETURN_CODE.to_string(),
            pattern_head: None,
            pattern_tail: None,
            max_bytes: DEFAULT_MAX_BYTES,
        },
    })
}

pub fn build_sql(args: &CreateMonitorArgs) -> Result<AddSqlMonitorRequest, HinemosError> {
    let kind = MonitorKind::Sql;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let connection_url = required_text(args.connection_url.as_deref(), "connection_url", kind)?;
    let user = required_text(args.user.as_deref(), "user", kind)?;
    let password = required_text(args.password.as_deref(), "password", kind)?;
    let jdbc_driver = required_text(args.jdbc_driver.as_deref(), "jdbc_driver", kind)?;
    let query = required_text(args.sql.as_deref(), "sql", kind)?;
    let table = level_table(args)?;

    Ok(AddSqlMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "SQL Value", "count", &table)?,
        sql_check_info: SqlCheckInfo {
            connection_url,
            user,
            password,
            jdbc_driver,
            query,
            timeout: args.timeout.unwrap_or(SQL_TIMEOUT_MS),
        },
    })
}

pub fn build_jmx(args: &CreateMonitorArgs) -> Result<AddJmxMonitorRequest, HinemosError> {
    let kind = MonitorKind::Jmx;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let port = required_value(args.port, "port", kind)?;
    let table = level_table(args)?;

    Ok(AddJmxMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "JMX Value", "count", &table)?,
        jmx_check_info: JmxCheckInfo {
            port,
            auth_user: args.auth_user.clone(),
            auth_password: args.auth_password.clone(),
            url: args.url.clone(),
            convert_flg: args.convert_flg.unwrap_or(ConvertFlag::None),
            master_id: args
                .master_id
                .clone()
                .unwrap_or_else(|| DEFAULT_JMX_MASTER.to_string()),
            url_format_name: DEFAULT_JMX_URL_FORMAT.to_string(),
        },
    })
}

pub fn build_process(args: &CreateMonitorArgs) -> Result<AddProcessMonitorRequest, HinemosError> {
    let kind = MonitorKind::Process;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let param = required_text(args.param.as_deref(), "param", kind)?;
    let min = args.min_count.unwrap_or(DEFAULT_MIN_PROCESSES);
    let max = args.max_count.unwrap_or(DEFAULT_MAX_PROCESSES);
    if min > max {
        return Err(HinemosError::validation(format!(
            "min_count ({min}) must not exceed max_count ({max})"
        )));
    }

    Ok(AddProcessMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "Process Count", "count", &process_defaults(min, max))?,
        process_check_info: ProcessCheckInfo {
            param,
            case_sensitivity_flg: args.case_sensitive.unwrap_or(true),
            command: args
                .command
                .clone()
                .unwrap_or_else(|| DEFAULT_PROCESS_COMMAND.to_string()),
        },
    })
}

pub fn build_port(args: &CreateMonitorArgs) -> Result<AddPortMonitorRequest, HinemosError> {
    let kind = MonitorKind::Port;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let port_no = required_value(args.port_no, "port_no", kind)?;

    Ok(AddPortMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "Response Time", "msec", &HTTP_DEFAULTS)?,
        port_check_info: PortCheckInfo {
            port_no,
            service_id: args.service_id.clone(),
            timeout: args.timeout.unwrap_or(PORT_TIMEOUT_MS),
            run_count: args.run_count.unwrap_or(1),
            run_interval: PROBE_INTERVAL_MS,
        },
    })
}

pub fn build_winevent(
    args: &CreateMonitorArgs,
) -> Result<AddWinEventMonitorRequest, HinemosError> {
    let kind = MonitorKind::WinEvent;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let log_name = required_text(args.log_name.as_deref(), "log_name", kind)?;

    Ok(AddWinEventMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        string: string_settings(args, PatternRule::default_winevent())?,
        winevent_check_info: WinEventCheckInfo {
            log_name,
            source: args.source.clone(),
            level: args.level,
            keywords: args.keywords.clone(),
        },
    })
}

pub fn build_custom(args: &CreateMonitorArgs) -> Result<AddCustomMonitorRequest, HinemosError> {
    let kind = MonitorKind::Custom;
    let (monitor_id, facility_id) = identity(args, kind)?;
    let command = required_text(args.command.as_deref(), "command", kind)?;
    let table = level_table(args)?;

    Ok(AddCustomMonitorRequest {
        monitor_id,
        owner_role_id: owner_role(args),
        info: base_info(args, facility_id),
        numeric: numeric_settings(args, "Command Value", "count", &table)?,
        custom_check_info: CustomCheckInfo {
            command,
            timeout: args.timeout.unwrap_or(CUSTOM_TIMEOUT_MS),
            spec_flg: args.spec_flg.unwrap_or(false),
            convert_flg: args.convert_flg.unwrap_or(ConvertFlag::None),
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args(monitor_id: &str) -> CreateMonitorArgs {
        CreateMonitorArgs {
            monitor_id: monitor_id.to_string(),
            facility_id: "NODE01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn ping_request_carries_defaults() {
        let request = build_ping(&args("PING_01")).expect("ping");
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["monitorId"], json!("PING_01"));
        assert_eq!(value["facilityId"], json!("NODE01"));
        assert_eq!(value["application"], json!("Hinemos"));
        assert_eq!(value["ownerRoleId"], json!("ADMINISTRATORS"));
        assert_eq!(value["runInterval"], json!("MIN_05"));
        assert_eq!(value["collectorFlg"], json!(true));
        assert_eq!(value["predictionMethod"], json!("POLYNOMIAL_1"));
        assert_eq!(value["failurePriority"], json!("UNKNOWN"));
        assert_eq!(
            value["pingCheckInfo"],
            json!({"runCount": 1, "runInterval": 1000, "timeout": 5000})
        );
        assert_eq!(value["numericValueInfo"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn basic_rules_serialize_with_empty_classification() {
        let request = build_http_numeric(&CreateMonitorArgs {
            url: Some("https://example.test/".to_string()),
            ..args("HTTP_01")
        })
        .expect("http");
        let value = serde_json::to_value(&request).expect("serialize");

        let rules = value["numericValueInfo"].as_array().expect("rules");
        assert!(rules
            .iter()
            .any(|rule| rule["monitorNumericType"] == json!("")));
        assert!(rules
            .iter()
            .all(|rule| rule["monitorNumericType"] != json!("BASIC")));
    }

    #[test]
    fn caller_thresholds_replace_default_table() {
        let request = build_ping(&CreateMonitorArgs {
            thresholds: vec![
                ThresholdRule {
                    priority: Some(Priority::Info),
                    lower_limit: Some(0.0),
                    upper_limit: Some(100.0),
                    message: None,
                },
                ThresholdRule {
                    priority: Some(Priority::Critical),
                    lower_limit: Some(100.0),
                    upper_limit: Some(1000.0),
                    message: Some("slow".to_string()),
                },
            ],
            ..args("PING_02")
        })
        .expect("ping");

        let rules = request.numeric.numeric_value_info.expect("rules");
        assert_eq!(rules.len(), 2);
        assert!(rules
            .iter()
            .all(|rule| rule.monitor_numeric_type == MonitorNumericType::Basic));
    }

    #[test]
    fn string_rules_get_contiguous_orders() {
        let request = build_logfile(&CreateMonitorArgs {
            directory: Some("/var/log".to_string()),
            filename: Some("app.log".to_string()),
            patterns: vec![
                PatternRule::new(".*FATAL.*", Priority::Critical, "fatal"),
                PatternRule::new(".*WARN.*", Priority::Warning, "warn"),
                PatternRule::new(".*INFO.*", Priority::Info, "info"),
            ],
            ..args("LOG_01")
        })
        .expect("logfile");

        let orders: Vec<u32> = request
            .string
            .string_value_info
            .expect("rules")
            .iter()
            .map(|rule| rule.order_no)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(request.logfile_check_info.file_encoding, "UTF-8");
        assert_eq!(request.logfile_check_info.max_bytes, 131072);
    }

    #[test]
    fn string_monitors_fall_back_to_default_pattern() {
        let http = build_http_string(&CreateMonitorArgs {
            url: Some("https://example.test/".to_string()),
            ..args("HTTPS_01")
        })
        .expect("http string");
        let rules = http.string.string_value_info.expect("rules");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern, ".*error.*");
        assert_eq!(rules[0].priority, Priority::Critical);
        assert_eq!(
            http.string.priority_change_failure_type,
            Some(PriorityChangeFailureType::NotPriorityChange)
        );

        let winevent = build_winevent(&CreateMonitorArgs {
            log_name: Some("System".to_string()),
            ..args("WIN_01")
        })
        .expect("winevent");
        let rules = winevent.string.string_value_info.expect("rules");
        assert_eq!(rules[0].pattern, ".*");
        assert_eq!(rules[0].priority, Priority::Warning);
        assert_eq!(winevent.string.priority_change_failure_type, None);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let err = build_http_string(&CreateMonitorArgs {
            url: Some("https://example.test/".to_string()),
            patterns: vec![PatternRule::new("  ", Priority::Warning, "")],
            ..args("HTTPS_02")
        })
        .expect_err("empty pattern");
        assert!(err.is_validation());
    }

    #[test]
    fn level_monitors_use_warning_and_critical_levels() {
        let request = build_sql(&CreateMonitorArgs {
            connection_url: Some("jdbc:postgresql://db:5432/app".to_string()),
            user: Some("monitor".to_string()),
            password: Some("secret".to_string()),
            jdbc_driver: Some("org.postgresql.Driver".to_string()),
            sql: Some("SELECT count(*) FROM jobs".to_string()),
            warning_threshold: Some(50.0),
            critical_threshold: Some(75.0),
            ..args("SQL_01")
        })
        .expect("sql");

        let rules = request.numeric.numeric_value_info.expect("rules");
        let warning = rules
            .iter()
            .find(|rule| {
                rule.monitor_numeric_type == MonitorNumericType::Basic
                    && rule.priority == Priority::Warning
            })
            .expect("warning rule");
        assert_eq!(warning.threshold_lower_limit, Some(50.0));
        assert_eq!(warning.threshold_upper_limit, Some(75.0));
        assert_eq!(request.sql_check_info.timeout, 5000);
    }

    #[test]
    fn inverted_levels_are_rejected() {
        let err = build_custom(&CreateMonitorArgs {
            command: Some("/usr/local/bin/check".to_string()),
            warning_threshold: Some(95.0),
            critical_threshold: Some(90.0),
            ..args("CUSTOM_01")
        })
        .expect_err("inverted");
        assert!(err.is_validation());
    }

    #[test]
    fn missing_parameter_message_names_kind() {
        let err = build_http_numeric(&args("HTTP_02")).expect_err("missing url");
        assert_eq!(
            err.to_string(),
            "'url' parameter is required for HTTP numeric monitors"
        );

        let err = build_port(&args("PORT_01")).expect_err("missing port");
        assert_eq!(
            err.to_string(),
            "'port_no' parameter is required for port monitors"
        );
    }

    #[test]
    fn monitor_id_is_required_and_checked() {
        let err = build_ping(&args("")).expect_err("missing id");
        assert_eq!(
            err.to_string(),
            "'monitor_id' parameter is required for ping monitors"
        );

        assert!(build_ping(&args("PING 01")).is_err());
    }

    #[test]
    fn process_and_jmx_defaults() {
        let process = build_process(&CreateMonitorArgs {
            param: Some("nginx".to_string()),
            ..args("PROC_01")
        })
        .expect("process");
        assert_eq!(process.process_check_info.command, "ps");
        assert!(process.process_check_info.case_sensitivity_flg);

        let jmx = build_jmx(&CreateMonitorArgs {
            port: Some(9010),
            ..args("JMX_01")
        })
        .expect("jmx");
        assert_eq!(jmx.jmx_check_info.master_id, "JMX_MEMORY_HEAP_COMMITTED");
        assert_eq!(jmx.jmx_check_info.url_format_name, "Default");
        assert_eq!(jmx.jmx_check_info.convert_flg, ConvertFlag::None);
    }
}
