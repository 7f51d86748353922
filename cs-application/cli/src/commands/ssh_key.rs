//! SSH 密钥对命令

use anyhow::Result;
use cs_client::api::ssh::ListSshKeyPairsParams;
use cs_client::{is_id, SshKeyPair};

use super::common::{create_client, scope_options};
use super::output::{output_list, output_one, TableRow};
use crate::ResourceAction;

impl TableRow for SshKeyPair {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "FINGERPRINT", "ACCOUNT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.fingerprint.clone(),
            self.account.clone(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: ResourceAction, json: bool) -> Result<()> {
    let client = create_client(profile)?;

    match action {
        ResourceAction::List { scope, keyword } => {
            let mut p = ListSshKeyPairsParams::new();
            p.set_list_all(true);
            if let Some(keyword) = keyword {
                p.set_keyword(keyword);
            }
            let resp = client.execute_in(&p, &scope_options(&scope)).await?;
            output_list(&resp.ssh_key_pairs, json)
        }
        ResourceAction::Get { key, scope } => {
            let options = scope_options(&scope);
            let item = if is_id(&key) {
                client.ssh().get_ssh_key_pair_by_id(&key, &options).await?
            } else {
                client.ssh().get_ssh_key_pair_by_name(&key, &options).await?
            };
            output_one(&item, json)
        }
    }
}
