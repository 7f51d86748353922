//! 域命令

use anyhow::Result;
use cs_client::api::domain::ListDomainsParams;
use cs_client::{is_id, Domain};

use super::common::{create_client, scope_options};
use super::output::{output_list, output_one, TableRow};
use crate::ResourceAction;

impl TableRow for Domain {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "LEVEL", "PATH", "STATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.level.to_string(),
            self.path.clone(),
            self.state.clone(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: ResourceAction, json: bool) -> Result<()> {
    let client = create_client(profile)?;

    match action {
        ResourceAction::List { scope, keyword } => {
            let mut p = ListDomainsParams::new();
            p.set_list_all(true);
            if let Some(keyword) = keyword {
                p.set_keyword(keyword);
            }
            let resp = client.execute_in(&p, &scope_options(&scope)).await?;
            output_list(&resp.domains, json)
        }
        ResourceAction::Get { key, scope } => {
            let options = scope_options(&scope);
            let item = if is_id(&key) {
                client.domain().get_domain_by_id(&key, &options).await?
            } else {
                client.domain().get_domain_by_name(&key, &options).await?
            };
            output_one(&item, json)
        }
    }
}
