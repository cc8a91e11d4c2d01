//! Default numeric threshold tables and the rule conversions used by the
//! create and update builders.
//!
//! Every default table holds eight rows: the four judged priorities crossed
//! with `BASIC` and `CHANGE`. The values mirror configurations the manager is
//! known to accept and are data, not derived.

use std::collections::HashSet;

use crate::hinemos::error::HinemosError;
use crate::hinemos::models::{MonitorNumericType, NumericValueInfo, NumericValueInfoResponse, Priority};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRow {
    pub classification: MonitorNumericType,
    pub priority: Priority,
    pub lower: f64,
    pub upper: f64,
}

const fn row(classification: MonitorNumericType, priority: Priority, lower: f64, upper: f64) -> ThresholdRow {
    ThresholdRow {
        classification,
        priority,
        lower,
        upper,
    }
}

use MonitorNumericType::{Basic, Change};
use Priority::{Critical, Info, Unknown, Warning};

pub const CHANGE_ROWS: [ThresholdRow; 4] = [
    row(Change, Info, -1.0, 1.0),
    row(Change, Warning, -2.0, 2.0),
    row(Change, Critical, 0.0, 0.0),
    row(Change, Unknown, 0.0, 0.0),
];

pub const PING_DEFAULTS: [ThresholdRow; 8] = [
    CHANGE_ROWS[0],
    CHANGE_ROWS[1],
    CHANGE_ROWS[2],
    CHANGE_ROWS[3],
    row(Basic, Info, 1000.0, 1.0),
    row(Basic, Warning, 3000.0, 51.0),
    row(Basic, Critical, 0.0, 0.0),
    row(Basic, Unknown, 0.0, 0.0),
];

/// Response time in milliseconds. Shared by HTTP numeric and port monitors.
pub const HTTP_DEFAULTS: [ThresholdRow; 8] = [
    row(Basic, Warning, 0.0, 5000.0),
    row(Basic, Critical, 0.0, 0.0),
    row(Basic, Unknown, 0.0, 0.0),
    row(Basic, Info, 0.0, 1000.0),
    CHANGE_ROWS[0],
    CHANGE_ROWS[1],
    CHANGE_ROWS[3],
    CHANGE_ROWS[2],
];

pub const SNMP_DEFAULTS: [ThresholdRow; 8] = [
    row(Basic, Warning, 0.0, 80.0),
    row(Basic, Critical, 0.0, 0.0),
    row(Basic, Unknown, 0.0, 0.0),
    row(Basic, Info, 0.0, 50.0),
    CHANGE_ROWS[2],
    CHANGE_ROWS[1],
    CHANGE_ROWS[0],
    CHANGE_ROWS[3],
];

pub const DEFAULT_WARNING_LEVEL: f64 = 80.0;
pub const DEFAULT_CRITICAL_LEVEL: f64 = 90.0;
pub const DEFAULT_MIN_PROCESSES: f64 = 1.0;
pub const DEFAULT_MAX_PROCESSES: f64 = 10.0;

/// Level table for SQL, JMX and custom command values: INFO below `warning`,
/// WARNING from `warning` up to `critical`.
pub fn level_defaults(warning: f64, critical: f64) -> [ThresholdRow; 8] {
    [
        row(Basic, Info, 0.0, warning),
        row(Basic, Warning, warning, critical),
        row(Basic, Critical, 0.0, 0.0),
        row(Basic, Unknown, 0.0, 0.0),
        CHANGE_ROWS[0],
        CHANGE_ROWS[1],
        CHANGE_ROWS[2],
        CHANGE_ROWS[3],
    ]
}

/// Process count table: INFO while the count stays within `[min, max]`.
pub fn process_defaults(min: f64, max: f64) -> [ThresholdRow; 8] {
    [
        row(Basic, Info, min, max),
        row(Basic, Warning, 0.0, 0.0),
        row(Basic, Critical, 0.0, 0.0),
        row(Basic, Unknown, 0.0, 0.0),
        CHANGE_ROWS[0],
        CHANGE_ROWS[1],
        CHANGE_ROWS[2],
        CHANGE_ROWS[3],
    ]
}

pub fn to_values(rows: &[ThresholdRow]) -> Vec<NumericValueInfo> {
    rows.iter()
        .map(|row| NumericValueInfo {
            monitor_numeric_type: row.classification,
            priority: row.priority,
            threshold_lower_limit: Some(row.lower),
            threshold_upper_limit: Some(row.upper),
            message: None,
        })
        .collect()
}

/// Caller-supplied threshold. Always submitted as a `BASIC` rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdRule {
    pub priority: Option<Priority>,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
    pub message: Option<String>,
}

pub fn from_rules(rules: &[ThresholdRule]) -> Result<Vec<NumericValueInfo>, HinemosError> {
    let values: Vec<NumericValueInfo> = rules
        .iter()
        .map(|rule| NumericValueInfo {
            monitor_numeric_type: Basic,
            priority: rule.priority.unwrap_or(Warning),
            threshold_lower_limit: rule.lower_limit,
            threshold_upper_limit: rule.upper_limit,
            message: Some(rule.message.clone().unwrap_or_default()),
        })
        .collect();

    ensure_unique(&values)?;
    Ok(values)
}

/// Rejects tables with two rules for one `(classification, priority)` pair.
pub fn ensure_unique(values: &[NumericValueInfo]) -> Result<(), HinemosError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert((value.monitor_numeric_type, value.priority)) {
            return Err(HinemosError::validation(format!(
                "duplicate threshold for priority {:?} ({})",
                value.priority,
                classification_name(value.monitor_numeric_type)
            )));
        }
    }
    Ok(())
}

fn classification_name(classification: MonitorNumericType) -> &'static str {
    match classification {
        Basic => "BASIC",
        MonitorNumericType::Prediction => "PREDICTION",
        Change => "CHANGE",
    }
}

/// Compatibility guess for a stored rule that came back without a
/// classification tag. Both limits present with a negative lower limit, or
/// both limits zero, read as `CHANGE`; anything else reads as `BASIC`.
///
/// Reverse-engineered from manager responses; it may not hold for
/// configurations created outside this client.
pub fn infer_numeric_type(lower: Option<f64>, upper: Option<f64>) -> MonitorNumericType {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower < 0.0 || (lower == 0.0 && upper == 0.0) => Change,
        _ => Basic,
    }
}

/// Converts stored rules back into request rules. Rules without a priority
/// cannot be resubmitted and are dropped. Fails when the inferred
/// classifications collide, since the manager rejects the resubmitted table.
pub fn from_response(
    rules: &[NumericValueInfoResponse],
) -> Result<Vec<NumericValueInfo>, HinemosError> {
    let values: Vec<NumericValueInfo> = rules
        .iter()
        .filter_map(|rule| {
            let priority = rule.priority?;
            let classification = rule.monitor_numeric_type.unwrap_or_else(|| {
                infer_numeric_type(rule.threshold_lower_limit, rule.threshold_upper_limit)
            });
            Some(NumericValueInfo {
                monitor_numeric_type: classification,
                priority,
                threshold_lower_limit: rule.threshold_lower_limit,
                threshold_upper_limit: rule.threshold_upper_limit,
                message: rule.message.clone(),
            })
        })
        .collect();

    ensure_unique(&values).map_err(|err| {
        HinemosError::validation(format!(
            "stored thresholds cannot be resubmitted: {err}; pass explicit thresholds"
        ))
    })?;
    Ok(values)
}
