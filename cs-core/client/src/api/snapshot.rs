//! 快照管理 API
//!
//! 覆盖三类资源：卷快照、快照策略和虚拟机快照。

use std::collections::BTreeMap;
use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::lookup::{missing_entity, pick_by_id, pick_by_name, ListOption};
use crate::models::{
    ListSnapshotPoliciesResponse, ListSnapshotsResponse, ListVmSnapshotsResponse, Snapshot,
    SnapshotPolicy, SuccessResponse, VirtualMachine, VmSnapshot,
};
use crate::params::api_params;

api_params! {
    /// 创建卷快照
    CreateSnapshotParams("createSnapshot", Post, AsyncWrapped) -> Snapshot {
        account: String => "account",
        async_backup: bool => "asyncbackup",
        domain_id: String => "domainid",
        location_type: String => "locationtype",
        name: String => "name",
        policy_id: String => "policyid",
        quiesce_vm: bool => "quiescevm",
        tags: BTreeMap<String, String> => "tags",
        volume_id: String => "volumeid",
    }

    /// 删除卷快照
    DeleteSnapshotParams("deleteSnapshot", Post, Async) -> SuccessResponse {
        id: String => "id",
    }

    /// 把卷回滚到快照
    RevertSnapshotParams("revertSnapshot", Post, AsyncWrapped) -> Snapshot {
        id: String => "id",
    }

    /// 查询卷快照
    ListSnapshotsParams("listSnapshots", Get, Plain) -> ListSnapshotsResponse {
        account: String => "account",
        domain_id: String => "domainid",
        id: String => "id",
        ids: Vec<String> => "ids",
        interval_type: String => "intervaltype",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        project_id: String => "projectid",
        snapshot_type: String => "snapshottype",
        tags: BTreeMap<String, String> => "tags",
        volume_id: String => "volumeid",
        zone_id: String => "zoneid",
    }

    /// 创建快照策略
    CreateSnapshotPolicyParams("createSnapshotPolicy", Post, Wrapped) -> SnapshotPolicy {
        for_display: bool => "fordisplay",
        interval_type: String => "intervaltype",
        max_snaps: i64 => "maxsnaps",
        schedule: String => "schedule",
        tags: BTreeMap<String, String> => "tags",
        timezone: String => "timezone",
        volume_id: String => "volumeid",
    }

    /// 修改快照策略
    UpdateSnapshotPolicyParams("updateSnapshotPolicy", Post, AsyncWrapped) -> SnapshotPolicy {
        custom_id: String => "customid",
        for_display: bool => "fordisplay",
        id: String => "id",
    }

    /// 删除快照策略
    DeleteSnapshotPoliciesParams("deleteSnapshotPolicies", Post, Plain) -> SuccessResponse {
        id: String => "id",
        ids: Vec<String> => "ids",
    }

    /// 查询快照策略
    ListSnapshotPoliciesParams("listSnapshotPolicies", Get, Plain) -> ListSnapshotPoliciesResponse {
        for_display: bool => "fordisplay",
        id: String => "id",
        keyword: String => "keyword",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        volume_id: String => "volumeid",
    }

    /// 创建虚拟机快照
    CreateVmSnapshotParams("createVMSnapshot", Post, AsyncWrapped) -> VmSnapshot {
        description: String => "description",
        name: String => "name",
        quiesce_vm: bool => "quiescevm",
        snapshot_memory: bool => "snapshotmemory",
        virtual_machine_id: String => "virtualmachineid",
    }

    /// 删除虚拟机快照
    DeleteVmSnapshotParams("deleteVMSnapshot", Post, Async) -> SuccessResponse {
        vm_snapshot_id: String => "vmsnapshotid",
    }

    /// 把虚拟机回滚到快照
    RevertToVmSnapshotParams("revertToVMSnapshot", Post, AsyncWrapped) -> VirtualMachine {
        vm_snapshot_id: String => "vmsnapshotid",
    }

    /// 查询虚拟机快照
    ListVmSnapshotParams("listVMSnapshot", Get, Plain) -> ListVmSnapshotsResponse {
        account: String => "account",
        domain_id: String => "domainid",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        project_id: String => "projectid",
        state: String => "state",
        tags: BTreeMap<String, String> => "tags",
        virtual_machine_id: String => "virtualmachineid",
        vm_snapshot_id: String => "vmsnapshotid",
        vm_snapshot_ids: Vec<String> => "vmsnapshotids",
    }
}

impl CreateSnapshotParams {
    pub fn new(volume_id: &str) -> Self {
        let mut p = Self::default();
        p.set_volume_id(volume_id);
        p
    }
}

impl DeleteSnapshotParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl RevertSnapshotParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl ListSnapshotsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CreateSnapshotPolicyParams {
    pub fn new(
        interval_type: &str,
        max_snaps: i64,
        schedule: &str,
        timezone: &str,
        volume_id: &str,
    ) -> Self {
        let mut p = Self::default();
        p.set_interval_type(interval_type)
            .set_max_snaps(max_snaps)
            .set_schedule(schedule)
            .set_timezone(timezone)
            .set_volume_id(volume_id);
        p
    }
}

impl UpdateSnapshotPolicyParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeleteSnapshotPoliciesParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListSnapshotPoliciesParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CreateVmSnapshotParams {
    pub fn new(virtual_machine_id: &str) -> Self {
        let mut p = Self::default();
        p.set_virtual_machine_id(virtual_machine_id);
        p
    }
}

impl DeleteVmSnapshotParams {
    pub fn new(vm_snapshot_id: &str) -> Self {
        let mut p = Self::default();
        p.set_vm_snapshot_id(vm_snapshot_id);
        p
    }
}

impl RevertToVmSnapshotParams {
    pub fn new(vm_snapshot_id: &str) -> Self {
        let mut p = Self::default();
        p.set_vm_snapshot_id(vm_snapshot_id);
        p
    }
}

impl ListVmSnapshotParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 快照管理 API
pub struct SnapshotService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> SnapshotService<'a> {
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    // ============================================
    // 卷快照
    // ============================================

    /// 创建卷快照
    pub async fn create_snapshot(&self, p: &CreateSnapshotParams) -> Result<Snapshot> {
        info!("创建卷快照: {:?}", p.volume_id());
        self.client.execute(p).await
    }

    /// 删除卷快照
    pub async fn delete_snapshot(&self, p: &DeleteSnapshotParams) -> Result<SuccessResponse> {
        info!("删除卷快照: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 把卷回滚到快照
    pub async fn revert_snapshot(&self, p: &RevertSnapshotParams) -> Result<Snapshot> {
        info!("回滚卷快照: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 查询卷快照
    pub async fn list_snapshots(&self, p: &ListSnapshotsParams) -> Result<ListSnapshotsResponse> {
        info!("查询卷快照列表");
        self.client.execute(p).await
    }

    pub async fn get_snapshot_id(&self, name: &str, options: &[ListOption]) -> Result<String> {
        Ok(self.get_snapshot_by_name(name, options).await?.id)
    }

    /// 按名称查询卷快照
    pub async fn get_snapshot_by_name(&self, name: &str, options: &[ListOption]) -> Result<Snapshot> {
        let mut p = ListSnapshotsParams::new();
        p.set_name(name).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        pick_by_name("snapshot", name, listing)
    }

    /// 按 ID 查询卷快照
    pub async fn get_snapshot_by_id(&self, id: &str, options: &[ListOption]) -> Result<Snapshot> {
        let mut p = ListSnapshotsParams::new();
        p.set_id(id).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "snapshot", id))?;
        pick_by_id("snapshot", id, listing)
    }

    // ============================================
    // 快照策略
    // ============================================

    /// 创建快照策略
    pub async fn create_snapshot_policy(
        &self,
        p: &CreateSnapshotPolicyParams,
    ) -> Result<SnapshotPolicy> {
        info!("创建快照策略: {:?} {:?}", p.volume_id(), p.interval_type());
        self.client.execute(p).await
    }

    /// 修改快照策略
    pub async fn update_snapshot_policy(
        &self,
        p: &UpdateSnapshotPolicyParams,
    ) -> Result<SnapshotPolicy> {
        info!("修改快照策略: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 删除快照策略
    pub async fn delete_snapshot_policies(
        &self,
        p: &DeleteSnapshotPoliciesParams,
    ) -> Result<SuccessResponse> {
        info!("删除快照策略: {:?} {:?}", p.id(), p.ids());
        self.client.execute(p).await
    }

    /// 查询快照策略
    pub async fn list_snapshot_policies(
        &self,
        p: &ListSnapshotPoliciesParams,
    ) -> Result<ListSnapshotPoliciesResponse> {
        info!("查询快照策略");
        self.client.execute(p).await
    }

    // ============================================
    // 虚拟机快照
    // ============================================

    /// 创建虚拟机快照
    pub async fn create_vm_snapshot(&self, p: &CreateVmSnapshotParams) -> Result<VmSnapshot> {
        info!("创建虚拟机快照: {:?}", p.virtual_machine_id());
        self.client.execute(p).await
    }

    /// 删除虚拟机快照
    pub async fn delete_vm_snapshot(&self, p: &DeleteVmSnapshotParams) -> Result<SuccessResponse> {
        info!("删除虚拟机快照: {:?}", p.vm_snapshot_id());
        self.client.execute(p).await
    }

    /// 把虚拟机回滚到快照
    pub async fn revert_to_vm_snapshot(
        &self,
        p: &RevertToVmSnapshotParams,
    ) -> Result<VirtualMachine> {
        info!("回滚虚拟机快照: {:?}", p.vm_snapshot_id());
        self.client.execute(p).await
    }

    /// 查询虚拟机快照
    pub async fn list_vm_snapshot(
        &self,
        p: &ListVmSnapshotParams,
    ) -> Result<ListVmSnapshotsResponse> {
        info!("查询虚拟机快照列表");
        self.client.execute(p).await
    }

    pub async fn get_vm_snapshot_id(&self, name: &str, options: &[ListOption]) -> Result<String> {
        let mut p = ListVmSnapshotParams::new();
        p.set_name(name).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        Ok(pick_by_name("vm snapshot", name, listing)?.id)
    }

    /// 按 ID 查询虚拟机快照
    pub async fn get_vm_snapshot_by_id(
        &self,
        id: &str,
        options: &[ListOption],
    ) -> Result<VmSnapshot> {
        let mut p = ListVmSnapshotParams::new();
        p.set_vm_snapshot_id(id).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "vm snapshot", id))?;
        pick_by_id("vm snapshot", id, listing)
    }
}
