//! 全局配置与平台能力

use serde::{Deserialize, Serialize};

use crate::decode::lenient;

/// 全局配置项
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub category: String,
    pub component: String,
    pub description: String,
    #[serde(rename = "defaultvalue")]
    pub default_value: String,
    #[serde(rename = "displaytext")]
    pub display_text: String,
    pub group: String,
    /// 修改后是否无需重启即生效
    #[serde(rename = "isdynamic", deserialize_with = "lenient::bool_or_string")]
    pub is_dynamic: bool,
    pub name: String,
    pub scope: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfigurationsResponse {
    pub count: i64,

    #[serde(rename = "configuration")]
    pub configurations: Vec<Configuration>,
}

/// 平台能力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capability {
    #[serde(rename = "allowusercreateprojects")]
    pub allow_user_create_projects: bool,
    #[serde(rename = "allowuserexpungerecovervm")]
    pub allow_user_expunge_recover_vm: bool,
    #[serde(rename = "apilimitinterval")]
    pub api_limit_interval: i64,
    #[serde(rename = "apilimitmax")]
    pub api_limit_max: i64,
    #[serde(rename = "cloudstackversion")]
    pub cloudstack_version: String,
    #[serde(rename = "customdiskofferingmaxsize")]
    pub custom_disk_offering_max_size: i64,
    #[serde(rename = "customdiskofferingminsize")]
    pub custom_disk_offering_min_size: i64,
    #[serde(rename = "dynamicrolesenabled")]
    pub dynamic_roles_enabled: bool,
    #[serde(rename = "kvmsnapshotenabled")]
    pub kvm_snapshot_enabled: bool,
    #[serde(rename = "projectinviterequired")]
    pub project_invite_required: bool,
    #[serde(rename = "regionsecondaryenabled")]
    pub region_secondary_enabled: bool,
    #[serde(rename = "securitygroupsenabled")]
    pub security_groups_enabled: bool,
    #[serde(rename = "userpublictemplateenabled")]
    pub user_public_template_enabled: bool,
}

/// 部署规划器
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentPlanner {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDeploymentPlannersResponse {
    pub count: i64,

    #[serde(rename = "deploymentPlanner")]
    pub deployment_planners: Vec<DeploymentPlanner>,
}
