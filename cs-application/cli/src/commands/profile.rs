//! 配置档案命令

use anyhow::Result;
use colored::Colorize;

use crate::config::{CliConfig, ProfileConfig};
use crate::ProfileAction;

pub async fn handle(action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Add {
            name,
            url,
            api_key,
            secret_key,
            insecure,
        } => add_profile(&name, &url, &api_key, &secret_key, insecure),
        ProfileAction::List => list_profiles(),
        ProfileAction::Remove { name } => remove_profile(&name),
        ProfileAction::Default { name } => set_default(&name),
    }
}

fn add_profile(name: &str, url: &str, api_key: &str, secret_key: &str, insecure: bool) -> Result<()> {
    let mut config = CliConfig::load()?;

    let mut profile = ProfileConfig::new(url, api_key, secret_key);
    profile.verify_ssl = !insecure;
    config.add_profile(name, profile)?;
    config.save()?;

    println!("{} 档案 {} 添加成功", "✓".green().bold(), name.cyan().bold());
    println!("  地址: {}", url.yellow());
    if insecure {
        println!("  {}", "不校验服务器证书".bright_black());
    }

    Ok(())
}

fn list_profiles() -> Result<()> {
    let config = CliConfig::load()?;
    let profiles = config.list_profiles();

    if profiles.is_empty() {
        println!("{}", "没有配置任何档案".yellow());
        println!("\n使用以下命令添加档案:");
        println!(
            "  {} cs profile add <NAME> --url <URL> --api-key <KEY> --secret-key <SECRET>",
            "$".bright_black()
        );
        return Ok(());
    }

    println!("{}\n", "配置档案列表:".bold());

    for (name, profile) in profiles {
        let marker = if config.default_profile.as_deref() == Some(name) {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!("{} {}", marker, name.cyan().bold());
        println!("    地址: {}", profile.api_url.yellow());
        println!("    Key:  {}", mask(&profile.api_key).bright_black());
        println!();
    }

    Ok(())
}

fn remove_profile(name: &str) -> Result<()> {
    let mut config = CliConfig::load()?;
    config.remove_profile(name)?;
    config.save()?;

    println!("{} 档案 {} 已移除", "✓".green().bold(), name.cyan().bold());
    Ok(())
}

fn set_default(name: &str) -> Result<()> {
    let mut config = CliConfig::load()?;
    config.set_default_profile(name)?;
    config.save()?;

    println!("{} 默认档案: {}", "✓".green().bold(), name.cyan().bold());
    Ok(())
}

/// 只显示密钥的前 6 位
fn mask(key: &str) -> String {
    let prefix: String = key.chars().take(6).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdefghijk"), "abcdef***");
        assert_eq!(mask("abc"), "abc***");
    }
}
