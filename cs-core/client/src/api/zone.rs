//! 区域管理 API

use std::collections::BTreeMap;
use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::lookup::{missing_entity, pick_by_id, pick_by_name, ListOption};
use crate::models::{ListZonesResponse, SuccessResponse, Zone};
use crate::params::api_params;

api_params! {
    /// 创建区域
    CreateZoneParams("createZone", Post, Wrapped) -> Zone {
        allocation_state: String => "allocationstate",
        dns1: String => "dns1",
        dns2: String => "dns2",
        domain: String => "domain",
        domain_id: String => "domainid",
        guest_cidr_address: String => "guestcidraddress",
        internaldns1: String => "internaldns1",
        internaldns2: String => "internaldns2",
        ip6dns1: String => "ip6dns1",
        ip6dns2: String => "ip6dns2",
        is_edge: bool => "isedge",
        local_storage_enabled: bool => "localstorageenabled",
        name: String => "name",
        network_type: String => "networktype",
        security_group_enabled: bool => "securitygroupenabled",
    }

    /// 修改区域
    UpdateZoneParams("updateZone", Post, Wrapped) -> Zone {
        allocation_state: String => "allocationstate",
        details: BTreeMap<String, String> => "details",
        dhcp_provider: String => "dhcpprovider",
        dns1: String => "dns1",
        dns2: String => "dns2",
        dns_search_order: Vec<String> => "dnssearchorder",
        domain: String => "domain",
        guest_cidr_address: String => "guestcidraddress",
        id: String => "id",
        internaldns1: String => "internaldns1",
        internaldns2: String => "internaldns2",
        ip6dns1: String => "ip6dns1",
        ip6dns2: String => "ip6dns2",
        is_public: bool => "ispublic",
        local_storage_enabled: bool => "localstorageenabled",
        name: String => "name",
        sort_key: i32 => "sortkey",
    }

    /// 删除区域
    DeleteZoneParams("deleteZone", Post, Plain) -> SuccessResponse {
        id: String => "id",
    }

    /// 查询区域列表
    ListZonesParams("listZones", Get, Plain) -> ListZonesResponse {
        available: bool => "available",
        domain_id: String => "domainid",
        id: String => "id",
        ids: Vec<String> => "ids",
        keyword: String => "keyword",
        name: String => "name",
        network_type: String => "networktype",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        show_capacities: bool => "showcapacities",
        show_icon: bool => "showicon",
        tags: BTreeMap<String, String> => "tags",
    }
}

impl CreateZoneParams {
    pub fn new(dns1: &str, internaldns1: &str, name: &str, network_type: &str) -> Self {
        let mut p = Self::default();
        p.set_dns1(dns1)
            .set_internaldns1(internaldns1)
            .set_name(name)
            .set_network_type(network_type);
        p
    }
}

impl UpdateZoneParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl DeleteZoneParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl ListZonesParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 区域管理 API
pub struct ZoneService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> ZoneService<'a> {
    /// 创建新的区域 API 实例
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    /// 创建区域
    pub async fn create_zone(&self, p: &CreateZoneParams) -> Result<Zone> {
        info!("创建区域: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 修改区域
    pub async fn update_zone(&self, p: &UpdateZoneParams) -> Result<Zone> {
        info!("修改区域: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 删除区域
    pub async fn delete_zone(&self, p: &DeleteZoneParams) -> Result<SuccessResponse> {
        info!("删除区域: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 查询区域列表
    pub async fn list_zones(&self, p: &ListZonesParams) -> Result<ListZonesResponse> {
        info!("查询区域列表");
        self.client.execute(p).await
    }

    /// 按名称查询区域 ID
    pub async fn get_zone_id(&self, name: &str, options: &[ListOption]) -> Result<String> {
        Ok(self.get_zone_by_name(name, options).await?.id)
    }

    /// 按名称查询区域
    pub async fn get_zone_by_name(&self, name: &str, options: &[ListOption]) -> Result<Zone> {
        info!("按名称查询区域: {}", name);
        let mut p = ListZonesParams::new();
        p.set_name(name);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        pick_by_name("zone", name, listing)
    }

    /// 按 ID 查询区域
    pub async fn get_zone_by_id(&self, id: &str, options: &[ListOption]) -> Result<Zone> {
        info!("按 ID 查询区域: {}", id);
        let mut p = ListZonesParams::new();
        p.set_id(id);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "zone", id))?;
        pick_by_id("zone", id, listing)
    }
}
