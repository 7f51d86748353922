//! 卷快照、快照策略与虚拟机快照

use serde::{Deserialize, Serialize};

use crate::decode::lenient;
use crate::lookup::{Listing, Resource};
use crate::models::Tag;

/// 卷快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub id: String,

    pub name: String,

    pub account: String,

    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    pub project: String,

    #[serde(rename = "projectid")]
    pub project_id: String,

    pub created: String,

    /// MANUAL / HOURLY / DAILY / WEEKLY / MONTHLY
    #[serde(rename = "intervaltype")]
    pub interval_type: String,

    #[serde(rename = "snapshottype")]
    pub snapshot_type: String,

    /// BackedUp / Creating / ...
    pub state: String,

    #[serde(rename = "volumeid")]
    pub volume_id: String,

    #[serde(rename = "volumename")]
    pub volume_name: String,

    #[serde(rename = "volumetype")]
    pub volume_type: String,

    #[serde(rename = "zoneid")]
    pub zone_id: String,

    #[serde(rename = "physicalsize")]
    pub physical_size: i64,

    #[serde(rename = "virtualsize")]
    pub virtual_size: i64,

    /// 是否可直接回滚到卷
    pub revertable: bool,

    #[serde(rename = "osdisplayname")]
    pub os_display_name: String,

    #[serde(rename = "ostypeid", deserialize_with = "lenient::string_or_number")]
    pub os_type_id: String,

    pub tags: Vec<Tag>,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

impl Resource for Snapshot {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSnapshotsResponse {
    pub count: i64,

    #[serde(rename = "snapshot")]
    pub snapshots: Vec<Snapshot>,
}

impl Listing for ListSnapshotsResponse {
    type Item = Snapshot;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

/// 定时快照策略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotPolicy {
    pub id: String,

    #[serde(rename = "fordisplay")]
    pub for_display: bool,

    /// 0 HOURLY, 1 DAILY, 2 WEEKLY, 3 MONTHLY
    #[serde(rename = "intervaltype", deserialize_with = "lenient::i64_or_string")]
    pub interval_type: i64,

    /// 保留的快照数量
    #[serde(rename = "maxsnaps")]
    pub max_snaps: i64,

    pub schedule: String,

    pub timezone: String,

    #[serde(rename = "volumeid")]
    pub volume_id: String,

    pub tags: Vec<Tag>,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSnapshotPoliciesResponse {
    pub count: i64,

    #[serde(rename = "snapshotpolicy")]
    pub snapshot_policies: Vec<SnapshotPolicy>,
}

/// 虚拟机快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmSnapshot {
    pub id: String,

    pub name: String,

    #[serde(rename = "displayname")]
    pub display_name: String,

    pub description: String,

    pub account: String,

    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    pub project: String,

    #[serde(rename = "projectid")]
    pub project_id: String,

    pub created: String,

    /// 是否为虚拟机当前所在快照
    pub current: bool,

    pub parent: String,

    #[serde(rename = "parentName")]
    pub parent_name: String,

    pub state: String,

    /// Disk / DiskAndMemory
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(rename = "virtualmachineid")]
    pub virtual_machine_id: String,

    #[serde(rename = "zoneid")]
    pub zone_id: String,

    pub tags: Vec<Tag>,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobstatus")]
    pub job_status: i64,
}

impl Resource for VmSnapshot {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListVmSnapshotsResponse {
    pub count: i64,

    #[serde(rename = "vmSnapshot")]
    pub vm_snapshots: Vec<VmSnapshot>,
}

impl Listing for ListVmSnapshotsResponse {
    type Item = VmSnapshot;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<VmSnapshot> {
        self.vm_snapshots
    }
}
