//! 项目

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lookup::{Listing, Resource};
use crate::models::Tag;

/// 项目信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,

    pub name: String,

    #[serde(rename = "displaytext")]
    pub display_text: String,

    /// 项目所有者账户
    pub account: String,

    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    /// Active / Suspended / Disabled
    pub state: String,

    /// 新版本返回的所有者列表
    pub owner: Vec<Value>,

    pub created: String,

    pub tags: Vec<Tag>,

    #[serde(rename = "vmtotal")]
    pub vm_total: i64,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

impl Resource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListProjectsResponse {
    pub count: i64,

    #[serde(rename = "project")]
    pub projects: Vec<Project>,
}

impl Listing for ListProjectsResponse {
    type Item = Project;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Project> {
        self.projects
    }
}

/// 项目成员
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAccount {
    pub account: String,
    #[serde(rename = "accountid")]
    pub account_id: String,
    #[serde(rename = "accounttype")]
    pub account_type: i64,
    pub domain: String,
    #[serde(rename = "domainid")]
    pub domain_id: String,
    pub project: String,
    #[serde(rename = "projectid")]
    pub project_id: String,
    /// Admin / Regular
    pub role: String,
    #[serde(rename = "userid")]
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListProjectAccountsResponse {
    pub count: i64,

    #[serde(rename = "projectaccount")]
    pub project_accounts: Vec<ProjectAccount>,
}

/// 项目邀请
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInvitation {
    pub id: String,
    pub account: String,
    pub domain: String,
    #[serde(rename = "domainid")]
    pub domain_id: String,
    pub email: String,
    pub project: String,
    #[serde(rename = "projectid")]
    pub project_id: String,
    /// Pending / Completed / Declined / Expired
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListProjectInvitationsResponse {
    pub count: i64,

    #[serde(rename = "projectinvitation")]
    pub project_invitations: Vec<ProjectInvitation>,
}
