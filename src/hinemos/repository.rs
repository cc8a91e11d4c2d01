//! Node, scope and facility operations on the repository sub-API.

use std::net::IpAddr;

use serde_json::Value;
use tracing::info;

use super::client::{validate_id, HinemosClient};
use super::error::HinemosError;
use super::models::{
    AddNodeRequest, AddScopeRequest, AgentStatus, FacilityInfo, FacilityPingRequest,
    FacilityRelationRequest, FacilityTreeItem, GetNodeListRequest, IpAddressVersion,
    ModifyNodeRequest, ModifyScopeRequest, NewScopeInfo, NodeInfo, NodeValidRequest, SnmpVersion,
};

pub const ALL_USERS_ROLE: &str = "ALL_USERS";
pub const ADMINISTRATORS_ROLE: &str = "ADMINISTRATORS";
pub const DEFAULT_PLATFORM_FAMILY: &str = "LINUX";
pub const DEFAULT_PING_COUNT: u32 = 3;

const DEFAULT_SNMP_COMMUNITY: &str = "public";
const DEFAULT_SNMP_PORT: u16 = 161;

#[derive(Debug, Clone, Default)]
pub struct NewNode {
    pub facility_id: String,
    pub facility_name: String,
    pub ip_address: String,
    pub description: Option<String>,
    pub platform_family: Option<String>,
    pub sub_platform_family: Option<String>,
    pub owner_role_id: Option<String>,
}

/// Fields a caller may change on an existing node. Unset fields keep their
/// current server-side value.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub platform_family: Option<String>,
    pub sub_platform_family: Option<String>,
    pub valid: Option<bool>,
    pub administrator: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewScope {
    pub facility_id: String,
    pub facility_name: String,
    pub parent_facility_id: Option<String>,
    pub description: Option<String>,
    pub owner_role_id: Option<String>,
    pub icon_image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScopePatch {
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub icon_image: Option<String>,
}

pub struct RepositoryApi<'a> {
    client: &'a HinemosClient,
}

impl<'a> RepositoryApi<'a> {
    pub fn new(client: &'a HinemosClient) -> Self {
        Self { client }
    }

    pub async fn get_facility_tree(
        &self,
        root_facility_id: Option<&str>,
        owner_role_id: Option<&str>,
    ) -> Result<FacilityTreeItem, HinemosError> {
        let endpoint = match root_facility_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(root) => format!(
                "repository/facility_tree/{}",
                validate_id("root_facility_id", root)?
            ),
            None => "repository/facility_tree".to_string(),
        };
        self.client
            .get(&endpoint, &[("ownerRoleId", owner_role(owner_role_id))])
            .await
    }

    pub async fn get_node_tree(
        &self,
        owner_role_id: Option<&str>,
    ) -> Result<FacilityTreeItem, HinemosError> {
        self.client
            .get(
                "repository/facility_nodeTree",
                &[("ownerRoleId", owner_role(owner_role_id))],
            )
            .await
    }

    /// `full` includes the node configuration (OS, devices, variables).
    pub async fn get_node(&self, facility_id: &str, full: bool) -> Result<NodeInfo, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        let endpoint = if full {
            format!("repository/node/{facility_id}")
        } else {
            format!("repository/node_withoutNodeConfigInfo/{facility_id}")
        };
        self.client.get(&endpoint, &[]).await
    }

    pub async fn list_nodes(
        &self,
        filter: &GetNodeListRequest,
    ) -> Result<Vec<NodeInfo>, HinemosError> {
        self.client
            .post("repository/node_withoutNodeConfigInfo_search", filter)
            .await
    }

    pub async fn add_node(&self, request: &AddNodeRequest) -> Result<NodeInfo, HinemosError> {
        self.client.post("repository/node", request).await
    }

    pub async fn modify_node(
        &self,
        facility_id: &str,
        request: &ModifyNodeRequest,
    ) -> Result<NodeInfo, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        self.client
            .put(&format!("repository/node/{facility_id}"), request)
            .await
    }

    pub async fn delete_nodes(&self, facility_ids: &[String]) -> Result<Value, HinemosError> {
        let ids = join_ids("facility_ids", facility_ids)?;
        self.client
            .delete("repository/node", &[("facilityIds", ids)])
            .await
    }

    pub async fn get_scope(&self, facility_id: &str) -> Result<FacilityInfo, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        self.client
            .get(&format!("repository/scope/{facility_id}"), &[])
            .await
    }

    pub async fn add_scope(&self, request: &AddScopeRequest) -> Result<FacilityInfo, HinemosError> {
        self.client.post("repository/scope", request).await
    }

    pub async fn modify_scope(
        &self,
        facility_id: &str,
        request: &ModifyScopeRequest,
    ) -> Result<FacilityInfo, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        self.client
            .put(&format!("repository/scope/{facility_id}"), request)
            .await
    }

    pub async fn delete_scopes(&self, facility_ids: &[String]) -> Result<Value, HinemosError> {
        let ids = join_ids("facility_ids", facility_ids)?;
        self.client
            .delete("repository/scope", &[("facilityIds", ids)])
            .await
    }

    pub async fn assign_nodes(
        &self,
        parent_facility_id: &str,
        facility_ids: &[String],
    ) -> Result<Value, HinemosError> {
        let parent = validate_id("scope_id", parent_facility_id)?;
        let request = relation_request(facility_ids)?;
        self.client
            .put(&format!("repository/facilityRelation/{parent}"), &request)
            .await
    }

    pub async fn release_nodes(
        &self,
        parent_facility_id: &str,
        facility_ids: &[String],
    ) -> Result<Value, HinemosError> {
        let parent = validate_id("scope_id", parent_facility_id)?;
        let request = relation_request(facility_ids)?;
        self.client
            .put(&format!("repository/facilityRelation_release/{parent}"), &request)
            .await
    }

    pub async fn set_node_valid(&self, facility_id: &str, valid: bool) -> Result<Value, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        self.client
            .put(
                &format!("repository/node_valid/{facility_id}"),
                &NodeValidRequest { flg: valid },
            )
            .await
    }

    pub async fn get_agent_status(&self) -> Result<Vec<AgentStatus>, HinemosError> {
        self.client.get("repository/agentStatus", &[]).await
    }

    pub async fn ping_node(&self, facility_id: &str, count: u32) -> Result<Value, HinemosError> {
        let facility_id = validate_id("facility_id", facility_id)?;
        self.client
            .post(
                &format!("repository/facility_ping/{facility_id}"),
                &FacilityPingRequest {
                    reachability_num: count.max(1),
                },
            )
            .await
    }

    pub async fn list_facilities(&self) -> Result<Vec<FacilityInfo>, HinemosError> {
        self.client.get("repository/facility", &[]).await
    }

    pub async fn list_scopes(&self) -> Result<Vec<FacilityInfo>, HinemosError> {
        Ok(self
            .list_facilities()
            .await?
            .into_iter()
            .filter(FacilityInfo::is_scope)
            .collect())
    }

    pub async fn create_node(&self, node: NewNode) -> Result<NodeInfo, HinemosError> {
        let request = build_add_node(node)?;
        let created = self.add_node(&request).await?;
        info!(facility_id = %created.facility_id, "node created");
        Ok(created)
    }

    pub async fn update_node(
        &self,
        facility_id: &str,
        patch: NodePatch,
    ) -> Result<NodeInfo, HinemosError> {
        let current = self.get_node(facility_id, false).await?;
        let request = merge_node(&current, patch)?;
        self.modify_node(facility_id, &request).await
    }

    pub async fn create_scope(&self, scope: NewScope) -> Result<FacilityInfo, HinemosError> {
        let request = build_add_scope(scope)?;
        let created = self.add_scope(&request).await?;
        info!(facility_id = %created.facility_id, "scope created");
        Ok(created)
    }

    pub async fn update_scope(
        &self,
        facility_id: &str,
        patch: ScopePatch,
    ) -> Result<FacilityInfo, HinemosError> {
        let current = self.get_scope(facility_id).await?;
        let request = ModifyScopeRequest {
            facility_name: patch.facility_name.or(current.facility_name),
            description: patch.description.or(current.description),
            icon_image: patch.icon_image.or(current.icon_image),
        };
        self.modify_scope(facility_id, &request).await
    }
}

fn owner_role(owner_role_id: Option<&str>) -> String {
    owner_role_id
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(ALL_USERS_ROLE)
        .to_string()
}

fn join_ids(field: &str, ids: &[String]) -> Result<String, HinemosError> {
    if ids.is_empty() {
        return Err(HinemosError::validation(format!("'{field}' must not be empty")));
    }

    Ok(ids
        .iter()
        .map(|id| validate_id(field, id))
        .collect::<Result<Vec<_>, _>>()?
        .join(","))
}

fn relation_request(facility_ids: &[String]) -> Result<FacilityRelationRequest, HinemosError> {
    if facility_ids.is_empty() {
        return Err(HinemosError::validation("'node_ids' must not be empty"));
    }

    Ok(FacilityRelationRequest {
        facility_id_list: facility_ids
            .iter()
            .map(|id| validate_id("node_ids", id).map(str::to_string))
            .collect::<Result<_, _>>()?,
    })
}

/// Parses an address into its version tag and the canonical v4/v6 field pair.
pub fn split_ip_address(
    ip_address: &str,
) -> Result<(IpAddressVersion, Option<String>, Option<String>), HinemosError> {
    let parsed: IpAddr = ip_address.trim().parse().map_err(|_| {
        HinemosError::validation(format!("'ip_address' is not a valid IP address: {ip_address}"))
    })?;

    Ok(match parsed {
        IpAddr::V4(addr) => (IpAddressVersion::Ipv4, Some(addr.to_string()), None),
        IpAddr::V6(addr) => (IpAddressVersion::Ipv6, None, Some(addr.to_string())),
    })
}

pub fn build_add_node(node: NewNode) -> Result<AddNodeRequest, HinemosError> {
    let facility_id = validate_id("facility_id", &node.facility_id)?.to_string();
    let facility_name = node.facility_name.trim().to_string();
    if facility_name.is_empty() {
        return Err(HinemosError::validation("'facility_name' must not be empty"));
    }
    let (ip_address_version, ip_address_v4, ip_address_v6) = split_ip_address(&node.ip_address)?;

    Ok(AddNodeRequest {
        facility_id,
        node_name: Some(facility_name.clone()),
        facility_name,
        description: node.description.filter(|value| !value.is_empty()),
        valid: Some(true),
        owner_role_id: Some(
            node.owner_role_id
                .unwrap_or_else(|| ADMINISTRATORS_ROLE.to_string()),
        ),
        platform_family: Some(
            node.platform_family
                .unwrap_or_else(|| DEFAULT_PLATFORM_FAMILY.to_string()),
        ),
        sub_platform_family: node.sub_platform_family,
        ip_address_version,
        ip_address_v4,
        ip_address_v6,
        snmp_community: Some(DEFAULT_SNMP_COMMUNITY.to_string()),
        snmp_port: Some(DEFAULT_SNMP_PORT),
        snmp_version: Some(SnmpVersion::V2),
        administrator: None,
        contact: None,
        hardware_type: None,
        auto_device_search: None,
    })
}

/// Snapshot of `current` as a full modify payload with `patch` applied.
pub fn merge_node(current: &NodeInfo, patch: NodePatch) -> Result<ModifyNodeRequest, HinemosError> {
    let (ip_address_version, ip_address_v4, ip_address_v6) = match patch.ip_address.as_deref() {
        Some(address) => {
            let (version, v4, v6) = split_ip_address(address)?;
            (Some(version), v4, v6)
        }
        None => (
            current.ip_address_version,
            current.ip_address_v4.clone(),
            current.ip_address_v6.clone(),
        ),
    };

    Ok(ModifyNodeRequest {
        facility_name: patch.facility_name.or_else(|| current.facility_name.clone()),
        description: patch.description.or_else(|| current.description.clone()),
        valid: patch.valid.or(current.valid),
        auto_device_search: current.auto_device_search,
        administrator: patch.administrator.or_else(|| current.administrator.clone()),
        contact: patch.contact.or_else(|| current.contact.clone()),
        hardware_type: current.hardware_type.clone(),
        node_name: current.node_name.clone(),
        platform_family: patch
            .platform_family
            .or_else(|| current.platform_family.clone()),
        sub_platform_family: patch
            .sub_platform_family
            .or_else(|| current.sub_platform_family.clone()),
        ip_address_version,
        ip_address_v4,
        ip_address_v6,
        snmp_community: current.snmp_community.clone(),
        snmp_port: current.snmp_port,
        snmp_version: current.snmp_version,
    })
}

pub fn build_add_scope(scope: NewScope) -> Result<AddScopeRequest, HinemosError> {
    let facility_id = validate_id("facility_id", &scope.facility_id)?.to_string();
    let facility_name = scope.facility_name.trim().to_string();
    if facility_name.is_empty() {
        return Err(HinemosError::validation("'facility_name' must not be empty"));
    }
    let parent_facility_id = match scope
        .parent_facility_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        Some(parent) => Some(validate_id("parent_facility_id", parent)?.to_string()),
        None => None,
    };

    Ok(AddScopeRequest {
        parent_facility_id,
        scope_info: NewScopeInfo {
            facility_id,
            facility_name,
            description: scope.description.filter(|value| !value.is_empty()),
            icon_image: scope.icon_image,
            owner_role_id: owner_role(scope.owner_role_id.as_deref()),
        },
    })
}
