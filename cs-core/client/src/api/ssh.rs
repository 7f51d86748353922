//! SSH 密钥对 API

use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::lookup::{missing_entity, pick_by_id, pick_by_name, ListOption};
use crate::models::{ListSshKeyPairsResponse, SshKeyPair, SuccessResponse, VirtualMachine};
use crate::params::api_params;

api_params! {
    /// 创建密钥对，私钥只在此响应中返回
    CreateSshKeyPairParams("createSSHKeyPair", Post, Wrapped) -> SshKeyPair {
        account: String => "account",
        domain_id: String => "domainid",
        name: String => "name",
        project_id: String => "projectid",
    }

    /// 注册已有公钥
    RegisterSshKeyPairParams("registerSSHKeyPair", Post, Wrapped) -> SshKeyPair {
        account: String => "account",
        domain_id: String => "domainid",
        name: String => "name",
        project_id: String => "projectid",
        public_key: String => "publickey",
    }

    /// 删除密钥对
    DeleteSshKeyPairParams("deleteSSHKeyPair", Post, Plain) -> SuccessResponse {
        account: String => "account",
        domain_id: String => "domainid",
        name: String => "name",
        project_id: String => "projectid",
    }

    /// 查询密钥对
    ListSshKeyPairsParams("listSSHKeyPairs", Get, Plain) -> ListSshKeyPairsResponse {
        account: String => "account",
        domain_id: String => "domainid",
        fingerprint: String => "fingerprint",
        id: String => "id",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        project_id: String => "projectid",
    }

    /// 重置虚拟机的 SSH 密钥，虚拟机需处于停止状态
    ResetSshKeyForVirtualMachineParams("resetSSHKeyForVirtualMachine", Post, AsyncWrapped) -> VirtualMachine {
        account: String => "account",
        domain_id: String => "domainid",
        id: String => "id",
        key_pair: String => "keypair",
        key_pairs: Vec<String> => "keypairs",
        project_id: String => "projectid",
    }
}

impl CreateSshKeyPairParams {
    pub fn new(name: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name);
        p
    }
}

impl RegisterSshKeyPairParams {
    pub fn new(name: &str, public_key: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name).set_public_key(public_key);
        p
    }
}

impl DeleteSshKeyPairParams {
    pub fn new(name: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name);
        p
    }
}

impl ListSshKeyPairsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResetSshKeyForVirtualMachineParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

/// SSH 密钥对 API
pub struct SshService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> SshService<'a> {
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    /// 创建密钥对
    pub async fn create_ssh_key_pair(&self, p: &CreateSshKeyPairParams) -> Result<SshKeyPair> {
        info!("创建 SSH 密钥对: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 注册公钥
    pub async fn register_ssh_key_pair(&self, p: &RegisterSshKeyPairParams) -> Result<SshKeyPair> {
        info!("注册 SSH 公钥: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 删除密钥对
    pub async fn delete_ssh_key_pair(&self, p: &DeleteSshKeyPairParams) -> Result<SuccessResponse> {
        info!("删除 SSH 密钥对: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 查询密钥对
    pub async fn list_ssh_key_pairs(
        &self,
        p: &ListSshKeyPairsParams,
    ) -> Result<ListSshKeyPairsResponse> {
        info!("查询 SSH 密钥对列表");
        self.client.execute(p).await
    }

    /// 重置虚拟机 SSH 密钥
    pub async fn reset_ssh_key_for_virtual_machine(
        &self,
        p: &ResetSshKeyForVirtualMachineParams,
    ) -> Result<VirtualMachine> {
        info!("重置虚拟机 SSH 密钥: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 按名称查询密钥对
    pub async fn get_ssh_key_pair_by_name(
        &self,
        name: &str,
        options: &[ListOption],
    ) -> Result<SshKeyPair> {
        let mut p = ListSshKeyPairsParams::new();
        p.set_name(name).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        pick_by_name("ssh key pair", name, listing)
    }

    /// 按 ID 查询密钥对
    pub async fn get_ssh_key_pair_by_id(
        &self,
        id: &str,
        options: &[ListOption],
    ) -> Result<SshKeyPair> {
        let mut p = ListSshKeyPairsParams::new();
        p.set_id(id).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "ssh key pair", id))?;
        pick_by_id("ssh key pair", id, listing)
    }
}
