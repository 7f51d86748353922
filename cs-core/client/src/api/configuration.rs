//! 全局配置 API
//!
//! 提供全局配置查询/修改、平台能力和部署规划器查询。

use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::models::{
    Capability, Configuration, ListConfigurationsResponse, ListDeploymentPlannersResponse,
};
use crate::params::api_params;

api_params! {
    /// 查询全局配置
    ListConfigurationsParams("listConfigurations", Get, Plain) -> ListConfigurationsResponse {
        account_id: String => "accountid",
        category: String => "category",
        cluster_id: String => "clusterid",
        domain_id: String => "domainid",
        image_store_uuid: String => "imagestoreuuid",
        keyword: String => "keyword",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        storage_id: String => "storageid",
        zone_id: String => "zoneid",
    }

    /// 修改全局配置
    UpdateConfigurationParams("updateConfiguration", Post, Wrapped) -> Configuration {
        account_id: String => "accountid",
        cluster_id: String => "clusterid",
        domain_id: String => "domainid",
        image_store_uuid: String => "imagestoreuuid",
        name: String => "name",
        storage_id: String => "storageid",
        value: String => "value",
        zone_id: String => "zoneid",
    }

    /// 查询平台能力
    ListCapabilitiesParams("listCapabilities", Get, Wrapped) -> Capability {}

    /// 查询部署规划器
    ListDeploymentPlannersParams("listDeploymentPlanners", Get, Plain) -> ListDeploymentPlannersResponse {
        keyword: String => "keyword",
        page: i64 => "page",
        page_size: i64 => "pagesize",
    }
}

impl ListConfigurationsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UpdateConfigurationParams {
    pub fn new(name: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name);
        p
    }
}

impl ListCapabilitiesParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListDeploymentPlannersParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 全局配置 API
pub struct ConfigurationService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> ConfigurationService<'a> {
    /// 创建新的全局配置 API 实例
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    /// 查询全局配置
    pub async fn list_configurations(
        &self,
        p: &ListConfigurationsParams,
    ) -> Result<ListConfigurationsResponse> {
        info!("查询全局配置: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 修改全局配置
    pub async fn update_configuration(&self, p: &UpdateConfigurationParams) -> Result<Configuration> {
        info!("修改全局配置: {:?} = {:?}", p.name(), p.value());
        self.client.execute(p).await
    }

    /// 查询平台能力
    pub async fn list_capabilities(&self, p: &ListCapabilitiesParams) -> Result<Capability> {
        info!("查询平台能力");
        self.client.execute(p).await
    }

    /// 查询部署规划器
    pub async fn list_deployment_planners(
        &self,
        p: &ListDeploymentPlannersParams,
    ) -> Result<ListDeploymentPlannersResponse> {
        info!("查询部署规划器");
        self.client.execute(p).await
    }
}
