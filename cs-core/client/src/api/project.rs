//! 项目管理 API
//!
//! 提供项目管理功能，包括：
//! - 项目创建、修改、删除、激活、挂起（均为异步任务）
//! - 项目成员管理
//! - 项目邀请管理
//! - 按名称/ID 定位项目

use std::collections::BTreeMap;
use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::lookup::{missing_entity, pick_by_id, pick_by_name, ListOption};
use crate::models::{
    ListProjectAccountsResponse, ListProjectInvitationsResponse, ListProjectsResponse, Project,
    SuccessResponse,
};
use crate::params::api_params;

api_params! {
    /// 创建项目
    CreateProjectParams("createProject", Post, AsyncWrapped) -> Project {
        account: String => "account",
        account_id: String => "accountid",
        display_text: String => "displaytext",
        domain_id: String => "domainid",
        name: String => "name",
        user_id: String => "userid",
    }

    /// 修改项目
    UpdateProjectParams("updateProject", Post, AsyncWrapped) -> Project {
        account: String => "account",
        display_text: String => "displaytext",
        id: String => "id",
        name: String => "name",
        role_type: String => "roletype",
        swap_owner: bool => "swapowner",
        user_id: String => "userid",
    }

    /// 删除项目
    DeleteProjectParams("deleteProject", Post, Async) -> SuccessResponse {
        cleanup: bool => "cleanup",
        id: String => "id",
    }

    /// 激活项目
    ActivateProjectParams("activateProject", Post, AsyncWrapped) -> Project {
        id: String => "id",
    }

    /// 挂起项目
    SuspendProjectParams("suspendProject", Post, AsyncWrapped) -> Project {
        id: String => "id",
    }

    /// 添加账户到项目
    AddAccountToProjectParams("addAccountToProject", Post, Async) -> SuccessResponse {
        account: String => "account",
        email: String => "email",
        project_id: String => "projectid",
        project_role_id: String => "projectroleid",
        role_type: String => "roletype",
    }

    /// 从项目移除账户
    DeleteAccountFromProjectParams("deleteAccountFromProject", Post, Async) -> SuccessResponse {
        account: String => "account",
        project_id: String => "projectid",
    }

    /// 查询项目列表
    ListProjectsParams("listProjects", Get, Plain) -> ListProjectsResponse {
        account: String => "account",
        details: Vec<String> => "details",
        display_text: String => "displaytext",
        domain_id: String => "domainid",
        id: String => "id",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        name: String => "name",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        state: String => "state",
        tags: BTreeMap<String, String> => "tags",
    }

    /// 查询项目成员
    ListProjectAccountsParams("listProjectAccounts", Get, Plain) -> ListProjectAccountsResponse {
        account: String => "account",
        keyword: String => "keyword",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        project_id: String => "projectid",
        role: String => "role",
        user_id: String => "userid",
    }

    /// 查询项目邀请
    ListProjectInvitationsParams("listProjectInvitations", Get, Plain) -> ListProjectInvitationsResponse {
        account: String => "account",
        active_only: bool => "activeonly",
        domain_id: String => "domainid",
        id: String => "id",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        project_id: String => "projectid",
        state: String => "state",
        user_id: String => "userid",
    }

    /// 接受或拒绝项目邀请
    UpdateProjectInvitationParams("updateProjectInvitation", Post, Async) -> SuccessResponse {
        accept: bool => "accept",
        account: String => "account",
        project_id: String => "projectid",
        token: String => "token",
        user_id: String => "userid",
    }

    /// 删除项目邀请
    DeleteProjectInvitationParams("deleteProjectInvitation", Post, Async) -> SuccessResponse {
        id: String => "id",
    }
}

impl CreateProjectParams {
    pub fn new(name: &str) -> Self {
        let mut p = Self::default();
        p.set_name(name);
        p
    }
}

impl UpdateProjectParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl DeleteProjectParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl ActivateProjectParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl SuspendProjectParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

impl AddAccountToProjectParams {
    pub fn new(project_id: &str) -> Self {
        let mut p = Self::default();
        p.set_project_id(project_id);
        p
    }
}

impl DeleteAccountFromProjectParams {
    pub fn new(account: &str, project_id: &str) -> Self {
        let mut p = Self::default();
        p.set_account(account).set_project_id(project_id);
        p
    }
}

impl ListProjectsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListProjectAccountsParams {
    pub fn new(project_id: &str) -> Self {
        let mut p = Self::default();
        p.set_project_id(project_id);
        p
    }
}

impl ListProjectInvitationsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UpdateProjectInvitationParams {
    pub fn new(project_id: &str) -> Self {
        let mut p = Self::default();
        p.set_project_id(project_id);
        p
    }
}

impl DeleteProjectInvitationParams {
    pub fn new(id: &str) -> Self {
        let mut p = Self::default();
        p.set_id(id);
        p
    }
}

/// 项目管理 API
pub struct ProjectService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> ProjectService<'a> {
    /// 创建新的项目 API 实例
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    // ============================================
    // 项目生命周期
    // ============================================

    /// 创建项目
    pub async fn create_project(&self, p: &CreateProjectParams) -> Result<Project> {
        info!("创建项目: {:?}", p.name());
        self.client.execute(p).await
    }

    /// 修改项目
    pub async fn update_project(&self, p: &UpdateProjectParams) -> Result<Project> {
        info!("修改项目: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 删除项目
    pub async fn delete_project(&self, p: &DeleteProjectParams) -> Result<SuccessResponse> {
        info!("删除项目: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 激活项目
    pub async fn activate_project(&self, p: &ActivateProjectParams) -> Result<Project> {
        info!("激活项目: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 挂起项目
    pub async fn suspend_project(&self, p: &SuspendProjectParams) -> Result<Project> {
        info!("挂起项目: {:?}", p.id());
        self.client.execute(p).await
    }

    /// 查询项目列表
    pub async fn list_projects(&self, p: &ListProjectsParams) -> Result<ListProjectsResponse> {
        info!("查询项目列表");
        self.client.execute(p).await
    }

    // ============================================
    // 成员与邀请
    // ============================================

    /// 添加账户到项目
    pub async fn add_account_to_project(
        &self,
        p: &AddAccountToProjectParams,
    ) -> Result<SuccessResponse> {
        info!("添加账户到项目: {:?} -> {:?}", p.account(), p.project_id());
        self.client.execute(p).await
    }

    /// 从项目移除账户
    pub async fn delete_account_from_project(
        &self,
        p: &DeleteAccountFromProjectParams,
    ) -> Result<SuccessResponse> {
        info!("从项目移除账户: {:?} <- {:?}", p.project_id(), p.account());
        self.client.execute(p).await
    }

    /// 查询项目成员
    pub async fn list_project_accounts(
        &self,
        p: &ListProjectAccountsParams,
    ) -> Result<ListProjectAccountsResponse> {
        info!("查询项目成员: {:?}", p.project_id());
        self.client.execute(p).await
    }

    /// 查询项目邀请
    pub async fn list_project_invitations(
        &self,
        p: &ListProjectInvitationsParams,
    ) -> Result<ListProjectInvitationsResponse> {
        info!("查询项目邀请");
        self.client.execute(p).await
    }

    /// 接受或拒绝项目邀请
    pub async fn update_project_invitation(
        &self,
        p: &UpdateProjectInvitationParams,
    ) -> Result<SuccessResponse> {
        info!("处理项目邀请: {:?} accept={:?}", p.project_id(), p.accept());
        self.client.execute(p).await
    }

    /// 删除项目邀请
    pub async fn delete_project_invitation(
        &self,
        p: &DeleteProjectInvitationParams,
    ) -> Result<SuccessResponse> {
        info!("删除项目邀请: {:?}", p.id());
        self.client.execute(p).await
    }

    // ============================================
    // 按名称/ID 查询
    // ============================================

    /// 按名称查询项目 ID
    pub async fn get_project_id(&self, name: &str, options: &[ListOption]) -> Result<String> {
        Ok(self.get_project_by_name(name, options).await?.id)
    }

    /// 按名称查询项目
    pub async fn get_project_by_name(&self, name: &str, options: &[ListOption]) -> Result<Project> {
        info!("按名称查询项目: {}", name);
        let mut p = ListProjectsParams::new();
        p.set_name(name).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self.client.execute_with(&p, extra).await?;
        pick_by_name("project", name, listing)
    }

    /// 按 ID 查询项目
    pub async fn get_project_by_id(&self, id: &str, options: &[ListOption]) -> Result<Project> {
        info!("按 ID 查询项目: {}", id);
        let mut p = ListProjectsParams::new();
        p.set_id(id).set_list_all(true);

        let extra = self.client.resolve_options(options).await?;
        let listing = self
            .client
            .execute_with(&p, extra)
            .await
            .map_err(|e| missing_entity(e, "project", id))?;
        pick_by_id("project", id, listing)
    }
}
