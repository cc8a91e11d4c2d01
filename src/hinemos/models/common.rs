//! Closed enumerations shared by the repository and monitor DTOs.
//!
//! Unknown wire values are rejected on deserialization. `RunInterval` is the
//! one exception: it also accepts the legacy second counts.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    Unknown,
    Warning,
    Info,
    None,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(Self::Critical),
            "UNKNOWN" => Ok(Self::Unknown),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "NONE" => Ok(Self::None),
            other => Err(format!(
                "invalid priority '{other}', expected one of: CRITICAL, UNKNOWN, WARNING, INFO, NONE"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunInterval {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "SEC_30")]
    Sec30,
    #[serde(rename = "MIN_01")]
    Min01,
    #[serde(rename = "MIN_05")]
    Min05,
    #[serde(rename = "MIN_10")]
    Min10,
    #[serde(rename = "MIN_30")]
    Min30,
    #[serde(rename = "MIN_60")]
    Min60,
}

impl RunInterval {
    pub const ALL: [RunInterval; 7] = [
        Self::None,
        Self::Sec30,
        Self::Min01,
        Self::Min05,
        Self::Min10,
        Self::Min30,
        Self::Min60,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Sec30 => "SEC_30",
            Self::Min01 => "MIN_01",
            Self::Min05 => "MIN_05",
            Self::Min10 => "MIN_10",
            Self::Min30 => "MIN_30",
            Self::Min60 => "MIN_60",
        }
    }

    pub fn seconds(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Sec30 => 30,
            Self::Min01 => 60,
            Self::Min05 => 300,
            Self::Min10 => 600,
            Self::Min30 => 1800,
            Self::Min60 => 3600,
        }
    }

    /// Legacy numeric encoding used by older managers.
    pub fn from_seconds(seconds: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|interval| i64::from(interval.seconds()) == seconds)
    }
}

impl fmt::Display for RunInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RunInterval {
    /// Exact wire name, as the manager sends it.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == name)
    }

    /// Tolerant parse for agent-supplied arguments: case and surrounding
    /// whitespace are ignored.
    pub fn parse_argument(value: &str) -> Result<Self, String> {
        value.trim().to_ascii_uppercase().parse()
    }
}

impl FromStr for RunInterval {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| {
            format!(
                "invalid run interval '{value}', expected one of: NONE, SEC_30, MIN_01, MIN_05, MIN_10, MIN_30, MIN_60"
            )
        })
    }
}

impl<'de> Deserialize<'de> for RunInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Seconds(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => name.parse().map_err(de::Error::custom),
            Raw::Seconds(seconds) => Self::from_seconds(seconds).ok_or_else(|| {
                de::Error::custom(format!("unsupported run interval seconds: {seconds}"))
            }),
        }
    }
}

/// Threshold classification. `Basic` travels as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitorNumericType {
    #[serde(rename = "")]
    Basic,
    #[serde(rename = "PREDICTION")]
    Prediction,
    #[serde(rename = "CHANGE")]
    Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionMethod {
    #[serde(rename = "POLYNOMIAL_1")]
    Polynomial1,
    #[serde(rename = "POLYNOMIAL_2")]
    Polynomial2,
    #[serde(rename = "POLYNOMIAL_3")]
    Polynomial3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvertFlag {
    None,
    Delta,
}

impl FromStr for ConvertFlag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(Self::None),
            "DELTA" => Ok(Self::Delta),
            other => Err(format!(
                "invalid convert flag '{other}', expected NONE or DELTA"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotifyType {
    Status,
    Event,
    Mail,
    Job,
    Log,
    Command,
    Infra,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityChangeJudgmentType {
    NotPriorityChange,
    AcrossMonitorDetailId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityChangeFailureType {
    NotPriorityChange,
    PriorityChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MonitorType {
    Truth,
    Numeric,
    String,
    Trap,
    Scenario,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "TYPE_SCOPE")]
    Scope,
    #[serde(rename = "TYPE_NODE")]
    Node,
    #[serde(rename = "TYPE_COMPOSITE")]
    Composite,
    #[serde(rename = "TYPE_MANAGER")]
    Manager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpAddressVersion {
    Ipv4,
    Ipv6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnmpVersion {
    #[serde(rename = "TYPE_V1")]
    V1,
    #[serde(rename = "TYPE_V2")]
    V2,
    #[serde(rename = "TYPE_V3")]
    V3,
}

/// Weak reference to a notification channel owned by the manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRelation {
    pub notify_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_type: Option<NotifyType>,
}

impl NotifyRelation {
    pub fn new(notify_id: impl Into<String>) -> Self {
        Self {
            notify_id: notify_id.into(),
            notify_type: None,
        }
    }
}
