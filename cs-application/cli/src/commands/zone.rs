//! 区域命令

use anyhow::Result;
use cs_client::api::zone::ListZonesParams;
use cs_client::{is_id, Zone};

use super::common::{create_client, scope_options};
use super::output::{output_list, output_one, TableRow};
use crate::ResourceAction;

impl TableRow for Zone {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "NETWORK", "STATE", "DNS1"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.network_type.clone(),
            self.allocation_state.clone(),
            self.dns1.clone(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: ResourceAction, json: bool) -> Result<()> {
    let client = create_client(profile)?;

    match action {
        ResourceAction::List { scope, keyword } => {
            let mut p = ListZonesParams::new();
            if let Some(keyword) = keyword {
                p.set_keyword(keyword);
            }
            let resp = client.execute_in(&p, &scope_options(&scope)).await?;
            output_list(&resp.zones, json)
        }
        ResourceAction::Get { key, scope } => {
            let options = scope_options(&scope);
            let item = if is_id(&key) {
                client.zone().get_zone_by_id(&key, &options).await?
            } else {
                client.zone().get_zone_by_name(&key, &options).await?
            };
            output_one(&item, json)
        }
    }
}
