//! 区域

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lookup::{Listing, Resource};
use crate::models::Tag;

/// 区域信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    /// 区域 ID
    pub id: String,

    /// 区域名称
    pub name: String,

    pub description: String,

    #[serde(rename = "displaytext")]
    pub display_text: String,

    /// Enabled / Disabled
    #[serde(rename = "allocationstate")]
    pub allocation_state: String,

    /// Basic / Advanced
    #[serde(rename = "networktype")]
    pub network_type: String,

    #[serde(rename = "dhcpprovider")]
    pub dhcp_provider: String,

    pub dns1: String,

    pub dns2: String,

    pub ip6dns1: String,

    pub ip6dns2: String,

    pub internaldns1: String,

    pub internaldns2: String,

    /// 区域网络域名
    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    #[serde(rename = "domainname")]
    pub domain_name: String,

    #[serde(rename = "guestcidraddress")]
    pub guest_cidr_address: String,

    #[serde(rename = "localstorageenabled")]
    pub local_storage_enabled: bool,

    #[serde(rename = "securitygroupsenabled")]
    pub security_groups_enabled: bool,

    #[serde(rename = "zonetoken")]
    pub zone_token: String,

    #[serde(rename = "resourcedetails")]
    pub resource_details: BTreeMap<String, String>,

    pub tags: Vec<Tag>,
}

impl Resource for Zone {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListZonesResponse {
    pub count: i64,

    #[serde(rename = "zone")]
    pub zones: Vec<Zone>,
}

impl Listing for ListZonesResponse {
    type Item = Zone;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Zone> {
        self.zones
    }
}
