//! SSH 密钥对

use serde::{Deserialize, Serialize};

use crate::lookup::{Listing, Resource};

/// SSH 密钥对
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKeyPair {
    pub id: String,

    pub name: String,

    pub fingerprint: String,

    /// 仅 `createSSHKeyPair` 返回
    #[serde(rename = "privatekey")]
    pub private_key: String,

    pub account: String,

    pub domain: String,

    #[serde(rename = "domainid")]
    pub domain_id: String,

    pub project: String,

    #[serde(rename = "projectid")]
    pub project_id: String,
}

impl Resource for SshKeyPair {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSshKeyPairsResponse {
    pub count: i64,

    #[serde(rename = "sshkeypair")]
    pub ssh_key_pairs: Vec<SshKeyPair>,
}

impl Listing for ListSshKeyPairsResponse {
    type Item = SshKeyPair;

    fn count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<SshKeyPair> {
        self.ssh_key_pairs
    }
}
