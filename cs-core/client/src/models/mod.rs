//! CloudStack 响应数据模型
//!
//! 服务器返回的字段实际上都可能缺失，所有结构体都标注 `#[serde(default)]`，
//! 缺失字段取类型默认值。

use serde::{Deserialize, Serialize};

use crate::decode::lenient;

pub mod async_job;
pub mod configuration;
pub mod domain;
pub mod project;
pub mod snapshot;
pub mod ssh;
pub mod virtual_machine;
pub mod zone;

pub use async_job::{AsyncJob, ListAsyncJobsResponse};
pub use configuration::{
    Capability, Configuration, DeploymentPlanner, ListConfigurationsResponse,
    ListDeploymentPlannersResponse,
};
pub use domain::{Domain, ListDomainChildrenResponse, ListDomainsResponse};
pub use project::{
    ListProjectAccountsResponse, ListProjectInvitationsResponse, ListProjectsResponse, Project,
    ProjectAccount, ProjectInvitation,
};
pub use snapshot::{
    ListSnapshotPoliciesResponse, ListSnapshotsResponse, ListVmSnapshotsResponse, Snapshot,
    SnapshotPolicy, VmSnapshot,
};
pub use ssh::{ListSshKeyPairsResponse, SshKeyPair};
pub use virtual_machine::{Nic, VirtualMachine};
pub use zone::{ListZonesResponse, Zone};

/// 只返回成功标志的调用（删除等）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessResponse {
    /// 异步任务 ID
    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,

    #[serde(rename = "displaytext")]
    pub display_text: String,

    /// 部分版本以字符串 `"true"` 返回
    #[serde(deserialize_with = "lenient::bool_or_string")]
    pub success: bool,
}

/// 资源标签
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub key: String,
    pub value: String,
    pub account: String,
    pub customer: String,
    pub domain: String,
    #[serde(rename = "domainid")]
    pub domain_id: String,
    pub project: String,
    #[serde(rename = "projectid")]
    pub project_id: String,
    #[serde(rename = "resourceid")]
    pub resource_id: String,
    #[serde(rename = "resourcetype")]
    pub resource_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    #[test]
    fn test_success_as_string() {
        let r: SuccessResponse = decode(json!({ "success": "true" })).unwrap();
        assert!(r.success);
        assert_eq!(r.job_id, "");
    }

    #[test]
    fn test_success_with_job() {
        let r: SuccessResponse = decode(json!({
            "jobid": "5b1a7fd4-8f0a-4f55-9d5a-d0bb3b3c0f11",
            "success": true,
            "displaytext": "done"
        }))
        .unwrap();
        assert!(r.success);
        assert_eq!(r.display_text, "done");
        assert_eq!(r.job_id, "5b1a7fd4-8f0a-4f55-9d5a-d0bb3b3c0f11");
    }
}
