//! Flat views of manager records returned by tools and resources.

use serde::Serialize;

use crate::hinemos::models::{
    FacilityInfo, FacilityType, MonitorInfo, MonitorType, NodeInfo, RunInterval,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub facility_id: String,
    pub facility_name: Option<String>,
    pub ip_address: Option<String>,
    pub platform_family: Option<String>,
    pub valid: Option<bool>,
}

impl From<&NodeInfo> for NodeSummary {
    fn from(node: &NodeInfo) -> Self {
        Self {
            facility_id: node.facility_id.clone(),
            facility_name: node.facility_name.clone(),
            ip_address: node.ip_address().map(str::to_string),
            platform_family: node.platform_family.clone(),
            valid: node.valid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDetail {
    pub facility_id: String,
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub platform_family: Option<String>,
    pub sub_platform_family: Option<String>,
}

impl From<&NodeInfo> for NodeDetail {
    fn from(node: &NodeInfo) -> Self {
        Self {
            facility_id: node.facility_id.clone(),
            facility_name: node.facility_name.clone(),
            description: node.description.clone(),
            ip_address: node.ip_address().map(str::to_string),
            platform_family: node.platform_family.clone(),
            sub_platform_family: node.sub_platform_family.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeSummary {
    pub facility_id: String,
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub facility_type: Option<FacilityType>,
}

impl From<&FacilityInfo> for ScopeSummary {
    fn from(scope: &FacilityInfo) -> Self {
        Self {
            facility_id: scope.facility_id.clone(),
            facility_name: scope.facility_name.clone(),
            description: scope.description.clone(),
            facility_type: scope.facility_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSummary {
    pub monitor_id: String,
    pub monitor_type: Option<MonitorType>,
    pub monitor_type_id: Option<String>,
    pub description: Option<String>,
    pub facility_id: Option<String>,
    pub monitor_flg: Option<bool>,
    pub collector_flg: Option<bool>,
    pub run_interval: Option<RunInterval>,
}

impl From<&MonitorInfo> for MonitorSummary {
    fn from(monitor: &MonitorInfo) -> Self {
        let info = &monitor.info;
        Self {
            monitor_id: info.monitor_id.clone(),
            monitor_type: info.monitor_type,
            monitor_type_id: info.monitor_type_id.clone(),
            description: info.description.clone(),
            facility_id: info.facility_id.clone(),
            monitor_flg: info.monitor_flg,
            collector_flg: monitor.collector_flg,
            run_interval: info.run_interval,
        }
    }
}
