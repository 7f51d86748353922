//! 域管理 API
//!
//! 提供域的创建、修改、删除和查询，以及按名称/ID 定位域。

use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::lookup::{missing_entity, pick_by_id, pick_by_name, ListOption};
use crate::models::{Domain, ListDomainChildrenResponse, ListDomainsResponse, SuccessResponse};
use crate::params::api_params;

api_params! {
    /// 创建域
    CreateDomainParams("createDomain", Post, Wrapped) -> Domain {
        domain_id: String => "domainid",
        name: String => "name",
        network_domain: String => "networkdomain",
        parent_domain_id: String => "parentdomainid",
    }

    /// 修改域
    UpdateDomainParams("updateDomain", Post, Wrapped) -> Domain {
        id: String => "id",
        name: String => "name",
        network_domain: String => "networkdomain",
    }

    /// 删除域
    DeleteDomainParams("deleteDomain", Post, Async) -> SuccessResponse {
        cleanup: bool => "cleanup",
        id: String => "id",
    }

    /// 查询域列表
    ListDomainsParams("listDomains", Get, Plain) -> ListDomainsResponse {
        details: Vec<String> => "details",
        id: String => "id",
        keyword: String => "keyword",
        level: i64 => "level",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        show_icon: bool => "showicon",
    }

    /// 查询子域列表
    ListDomainChildrenParams("listDomainChildren", Get, Plain) -> ListDomainChildrenResponse {
        id: String => "id",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
    }
}

impl CreateDomainParams {
    pub fn new(name: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name);
        p
    }
}

impl UpdateDomainParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl DeleteDomainParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl ListDomainsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListDomainChildrenParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 域管理 API
pub struct DomainService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> DomainService<'a> {
    /// 创建新的域 API 实例
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    /// 创建域
    pub async fn create_domain(&self, p: &CreateDomainParams) -> Result<Domain> {
        info!("创建域: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 修改域
    pub async fn update_domain(&self, p: &UpdateDomainParams) -> Result<Domain> {
        info!("修改域: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 删除域
    pub async fn delete_domain(&self, p: &DeleteDomainParams) -> Result<SuccessResponse> {
        info!("删除域: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 查询域列表
    pub async fn list_domains(&self, p: &ListDomainsParams) -> Result<ListDomainsResponse> {
        info!("查询域列表");
        self.client.execute(p).await
    }

    /// 查询子域列表
    pub async fn list_domain_children(
        &self,
        p: &ListDomainChildrenParams,
    ) -> Result<ListDomainChildrenResponse> {
        info!("查询子域列表: {:?}", p.id());
        self.client.execute(p).await
    }

    // ============================================
    // 按名称/ID 查询
    // ============================================

    /// 按名称查询域 ID
    pub async fn get_domain_id(&self, name: &str, options: &[ListOption]) -> Result<String> {
        Ok(self.get_domain_by_name(name, options).await?.id)
    }

    /// 按名称查询域
    pub async fn get_domain_by_name(&self, name: &str, options: &[ListOption]) -> Result<Domain> {
        info!("按名称查询域: {}", name);
        let mut p = ListDomainsParams::new();
        p.set_name(name).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        pick_by_name("domain", name, listing)
    }

    /// 按 ID 查询域
    pub async fn get_domain_by_id(&self, id: &str, options: &[ListOption]) -> Result<Domain> {
        info!("按 ID 查询域: {}", id);
        let mut p = ListDomainsParams::new();
        p.set_id(id).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "domain", id))?;
        pick_by_id("domain", id, listing)
    }
}
