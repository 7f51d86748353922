//! 域

use serde::{Deserialize, Serialize};

use crate::decode::lenient;
use crate::lookup::{Listing, Resource};

/// 域信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// 域 ID
    pub id: String,

    /// 域名称
    pub name: String,

    /// 层级，ROOT 为 0
    pub level: i64,

    #[serde(rename = "haschild")]
    pub has_child: bool,

    #[serde(rename = "networkdomain")]
    pub network_domain: String,

    #[serde(rename = "parentdomainid")]
    pub parent_domain_id: String,

    #[serde(rename = "parentdomainname")]
    pub parent_domain_name: String,

    /// 完整路径，例如 `ROOT/dev`
    pub path: String,

    pub state: String,

    pub created: String,

    /// 虚拟机数量上限，`Unlimited` 表示不限
    #[serde(rename = "vmlimit", deserialize_with = "lenient::string_or_number")]
    pub vm_limit: String,

    #[serde(rename = "vmtotal")]
    pub vm_total: i64,

    #[serde(rename = "projectlimit", deserialize_with = "lenient::string_or_number")]
    pub project_limit: String,

    #[serde(rename = "projecttotal")]
    pub project_total: i64,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

impl Resource for Domain {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDomainsResponse {
    pub count: i64,

    #[serde(rename = "domain")]
    pub domains: Vec<Domain>,
}

impl Listing for ListDomainsResponse {
    type Item = Domain;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Domain> {
        self.domains
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDomainChildrenResponse {
    pub count: i64,

    #[serde(rename = "domain")]
    pub domains: Vec<Domain>,
}

impl Listing for ListDomainChildrenResponse {
    type Item = Domain;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Domain> {
        self.domains
    }
}
