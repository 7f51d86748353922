//! 虚拟机
//!
//! 只保留快照回滚和重置密钥等调用返回时常用的字段。

use serde::{Deserialize, Serialize};

use crate::decode::lenient;
use crate::models::Tag;

/// 虚拟机信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachine {
    pub id: String,

    pub name: String,

    #[serde(rename = "displayname")]
    pub display_name: String,

    pub account: String,

    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    pub project: String,

    #[serde(rename = "projectid")]
    pub project_id: String,

    /// Running / Stopped / ...
    pub state: String,

    #[serde(rename = "zoneid")]
    pub zone_id: String,

    #[serde(rename = "zonename")]
    pub zone_name: String,

    #[serde(rename = "templateid")]
    pub template_id: String,

    #[serde(rename = "templatename")]
    pub template_name: String,

    #[serde(rename = "serviceofferingid")]
    pub service_offering_id: String,

    #[serde(rename = "serviceofferingname")]
    pub service_offering_name: String,

    #[serde(rename = "guestosid")]
    pub guest_os_id: String,

    /// 部分版本以浮点数返回
    #[serde(rename = "ostypeid", deserialize_with = "lenient::string_or_number")]
    pub os_type_id: String,

    #[serde(rename = "cpunumber")]
    pub cpu_number: i64,

    /// 内存 (MB)
    pub memory: i64,

    pub hypervisor: String,

    #[serde(rename = "haenable")]
    pub ha_enable: bool,

    #[serde(rename = "keypairs")]
    pub key_pairs: String,

    /// 重置密钥后返回的新密码
    pub password: String,

    #[serde(rename = "passwordenabled")]
    pub password_enabled: bool,

    pub created: String,

    pub nic: Vec<Nic>,

    pub tags: Vec<Tag>,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

/// 网卡
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nic {
    pub id: String,
    #[serde(rename = "networkid")]
    pub network_id: String,
    #[serde(rename = "networkname")]
    pub network_name: String,
    #[serde(rename = "ipaddress")]
    pub ip_address: String,
    #[serde(rename = "macaddress")]
    pub mac_address: String,
    #[serde(rename = "isdefault")]
    pub is_default: bool,
}
