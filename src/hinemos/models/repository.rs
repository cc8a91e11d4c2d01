//! Repository (facility, node, scope) and access DTOs.

use serde::{Deserialize, Serialize};

use super::common::{FacilityType, IpAddressVersion, SnmpVersion};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: TokenInfo,
    #[serde(default)]
    pub manager_info: Option<ManagerInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub token_id: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub valid_term_minites: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityInfo {
    pub facility_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<FacilityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_sort_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_in_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_refer_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_datetime: Option<String>,
}

impl FacilityInfo {
    pub fn is_scope(&self) -> bool {
        self.facility_type == Some(FacilityType::Scope)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityTreeItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FacilityInfo>,
    #[serde(default)]
    pub children: Vec<FacilityTreeItem>,
}

impl FacilityTreeItem {
    pub fn count(&self) -> usize {
        usize::from(self.data.is_some())
            + self.children.iter().map(FacilityTreeItem::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub facility_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_device_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_version: Option<IpAddressVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<SnmpVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_retry_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_private_key_filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_multiplicity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_awake_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_sort_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_in_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_refer_flg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_datetime: Option<String>,
}

impl NodeInfo {
    /// The address matching the node's version tag.
    pub fn ip_address(&self) -> Option<&str> {
        match self.ip_address_version {
            Some(IpAddressVersion::Ipv6) => self.ip_address_v6.as_deref(),
            _ => self.ip_address_v4.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNodeRequest {
    pub facility_id: String,
    pub facility_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_platform_family: Option<String>,
    pub ip_address_version: IpAddressVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<SnmpVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_device_search: Option<bool>,
}

/// Full replacement payload for `PUT repository/node/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyNodeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_device_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_version: Option<IpAddressVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_v6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_version: Option<SnmpVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNodeListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_facility_id: Option<String>,
    pub node_config_filter_is_and: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_config_target_datetime: Option<String>,
}

impl GetNodeListRequest {
    pub fn under(parent_facility_id: Option<String>) -> Self {
        Self {
            parent_facility_id,
            node_config_filter_is_and: true,
            node_config_target_datetime: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScopeInfo {
    pub facility_id: String,
    pub facility_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
    pub owner_role_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddScopeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_facility_id: Option<String>,
    pub scope_info: NewScopeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyScopeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRelationRequest {
    pub facility_id_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeValidRequest {
    pub flg: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPingRequest {
    pub reachability_num: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    pub facility_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awake_port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_info_ignores_unmodelled_fields() {
        let node: NodeInfo = serde_json::from_value(json!({
            "facilityId": "NODE01",
            "facilityName": "web",
            "ipAddressVersion": "IPV4",
            "ipAddressV4": "192.0.2.10",
            "nodeOsInfo": {"osName": "Linux"},
            "someFutureField": 42
        }))
        .expect("permissive node");

        assert_eq!(node.facility_id, "NODE01");
        assert_eq!(node.ip_address(), Some("192.0.2.10"));
    }

    #[test]
    fn add_scope_request_nests_scope_info() {
        let request = AddScopeRequest {
            parent_facility_id: None,
            scope_info: NewScopeInfo {
                facility_id: "WEB".to_string(),
                facility_name: "Web servers".to_string(),
                description: None,
                icon_image: None,
                owner_role_id: "ALL_USERS".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({
                "scopeInfo": {
                    "facilityId": "WEB",
                    "facilityName": "Web servers",
                    "ownerRoleId": "ALL_USERS"
                }
            })
        );
    }

    #[test]
    fn modify_node_request_round_trips_without_nulls() {
        let request = ModifyNodeRequest {
            facility_name: Some("db".to_string()),
            ip_address_version: Some(IpAddressVersion::Ipv6),
            ip_address_v6: Some("2001:db8::1".to_string()),
            snmp_port: Some(161),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert!(value.get("ipAddressV4").is_none());
        assert_eq!(value["ipAddressVersion"], json!("IPV6"));

        let parsed: ModifyNodeRequest = serde_json::from_value(value).expect("parse");
        assert_eq!(parsed, request);
    }

    #[test]
    fn facility_tree_counts_nested_entries() {
        let tree: FacilityTreeItem = serde_json::from_value(json!({
            "data": {"facilityId": "_ROOT_", "facilityType": "TYPE_SCOPE"},
            "children": [
                {"data": {"facilityId": "NODE01", "facilityType": "TYPE_NODE"}, "children": []},
                {"data": {"facilityId": "WEB", "facilityType": "TYPE_SCOPE"}, "children": [
                    {"data": {"facilityId": "NODE02", "facilityType": "TYPE_NODE"}}
                ]}
            ]
        }))
        .expect("tree");

        assert_eq!(tree.count(), 4);
    }
}
