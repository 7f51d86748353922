//! 公共工具函数模块
//!
//! 提供各命令模块共享的功能：
//! - 按档案创建客户端
//! - 把命令行条件转换为查询条件

use anyhow::{Context, Result};
use cs_client::{CloudStackClient, ListOption};
use tracing::debug;

use crate::config::CliConfig;
use crate::Scope;

/// 按档案和环境变量创建客户端
pub fn create_client(profile: Option<&str>) -> Result<CloudStackClient> {
    let config = CliConfig::load()?.resolve(profile, |key| std::env::var(key).ok())?;
    debug!("使用 API 地址: {}", config.api_url);

    CloudStackClient::new(&config).context("创建 CloudStack 客户端失败")
}

/// 命令行条件转换为查询条件
pub fn scope_options(scope: &Scope) -> Vec<ListOption> {
    let mut options = Vec::new();
    if let Some(project) = &scope.project {
        options.push(ListOption::project(project.as_str()));
    }
    if let Some(zone) = &scope.zone {
        options.push(ListOption::zone(zone.as_str()));
    }
    if let Some(domain_id) = &scope.domain_id {
        options.push(ListOption::domain(domain_id.as_str()));
    }
    options
}

/// 解析 `key=value` 形式的参数
pub fn parse_key_value(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .with_context(|| format!("参数格式应为 key=value: {}", arg))?;
    if key.is_empty() {
        anyhow::bail!("参数名不能为空: {}", arg);
    }
    Ok((key.to_string(), value.to_string()))
}
