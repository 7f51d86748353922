//! 全局配置项命令

use anyhow::Result;
use colored::Colorize;
use cs_client::api::configuration::{ListConfigurationsParams, UpdateConfigurationParams};
use cs_client::Configuration;

use super::common::create_client;
use super::output::{output_list, output_one, TableRow};
use crate::ConfigAction;

impl TableRow for Configuration {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "VALUE", "CATEGORY", "DYNAMIC"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.value.clone(),
            self.category.clone(),
            self.is_dynamic.to_string(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: ConfigAction, json: bool) -> Result<()> {
    let client = create_client(profile)?;

    match action {
        ConfigAction::List { name, category } => {
            let mut p = ListConfigurationsParams::new();
            if let Some(name) = name {
                p.set_name(name);
            }
            if let Some(category) = category {
                p.set_category(category);
            }

            let resp = client.configuration().list_configurations(&p).await?;
            output_list(&resp.configurations, json)
        }
        ConfigAction::Set { name, value } => {
            let mut p = UpdateConfigurationParams::new(&name);
            p.set_value(value);

            let updated = client.configuration().update_configuration(&p).await?;
            if !json && !updated.is_dynamic {
                println!("{}", "该配置项需要重启管理服务器后生效".yellow());
            }
            output_one(&updated, json)
        }
    }
}
