//! 卷快照命令

use anyhow::Result;
use cs_client::api::snapshot::ListSnapshotsParams;
use cs_client::{is_id, Snapshot};

use super::common::{create_client, scope_options};
use super::output::{output_list, output_one, TableRow};
use crate::ResourceAction;

impl TableRow for Snapshot {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "VOLUME", "INTERVAL", "STATE", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.volume_name.clone(),
            self.interval_type.clone(),
            self.state.clone(),
            self.created.clone(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: ResourceAction, json: bool) -> Result<()> {
    let client = create_client(profile)?;

    match action {
        ResourceAction::List { scope, keyword } => {
            let mut p = ListSnapshotsParams::new();
            p.set_list_all(true);
            if let Some(keyword) = keyword {
                p.set_keyword(keyword);
            }
            let resp = client.execute_in(&p, &scope_options(&scope)).await?;
            output_list(&resp.snapshots, json)
        }
        ResourceAction::Get { key, scope } => {
            let options = scope_options(&scope);
            let item = if is_id(&key) {
                client.snapshot().get_snapshot_by_id(&key, &options).await?
            } else {
                client.snapshot().get_snapshot_by_name(&key, &options).await?
            };
            output_one(&item, json)
        }
    }
}
