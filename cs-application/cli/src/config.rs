//! CLI 配置管理
//!
//! **数据存储方式**: TOML 文件 (~/.config/cloudstack/config.toml)
//!
//! 每个档案对应一个管理服务器的连接信息。环境变量
//! `CLOUDSTACK_API_URL`、`CLOUDSTACK_API_KEY`、`CLOUDSTACK_SECRET_KEY`
//! 覆盖档案中的同名字段，没有任何档案时也可以只用环境变量。

use anyhow::{Context, Result};
use cs_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const ENV_API_URL: &str = "CLOUDSTACK_API_URL";
pub const ENV_API_KEY: &str = "CLOUDSTACK_API_KEY";
pub const ENV_SECRET_KEY: &str = "CLOUDSTACK_SECRET_KEY";

/// CLI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// 档案列表
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    /// 默认档案
    pub default_profile: Option<String>,

    /// 配置版本
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// 档案配置
pub type ProfileConfig = ClientConfig;

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            profiles: HashMap::new(),
            default_profile: None,
            version: default_version(),
        }
    }
}

impl CliConfig {
    /// 获取配置文件路径
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("无法获取用户主目录")?;
        Ok(home.join(".config").join("cloudstack").join("config.toml"))
    }

    /// 加载配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("解析配置文件失败: {:?}", path))
    }

    /// 保存配置
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("序列化配置失败")?;

        fs::write(&path, content).with_context(|| format!("写入配置文件失败: {:?}", path))?;

        Ok(())
    }

    /// 添加档案
    pub fn add_profile(&mut self, name: &str, profile: ProfileConfig) -> Result<()> {
        if self.profiles.contains_key(name) {
            anyhow::bail!("档案 {} 已存在", name);
        }

        profile
            .validate()
            .with_context(|| format!("档案 {} 配置无效", name))?;
        self.profiles.insert(name.to_string(), profile);

        // 第一个档案作为默认档案
        if self.default_profile.is_none() {
            self.default_profile = Some(name.to_string());
        }

        Ok(())
    }

    /// 移除档案
    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        if self.profiles.remove(name).is_none() {
            anyhow::bail!("档案 {} 不存在", name);
        }

        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }

        Ok(())
    }

    /// 获取档案
    pub fn get_profile(&self, name: &str) -> Result<&ProfileConfig> {
        self.profiles
            .get(name)
            .with_context(|| format!("档案 {} 不存在", name))
    }

    /// 列出所有档案，按名称排序
    pub fn list_profiles(&self) -> Vec<(&str, &ProfileConfig)> {
        let mut profiles: Vec<_> = self
            .profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
            .collect();
        profiles.sort_by(|a, b| a.0.cmp(b.0));
        profiles
    }

    /// 设置默认档案
    pub fn set_default_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            anyhow::bail!("档案 {} 不存在", name);
        }

        self.default_profile = Some(name.to_string());
        Ok(())
    }

    /// 解析出最终的客户端配置
    ///
    /// 档案按 `name`、默认档案的顺序选取，再叠加环境变量。
    pub fn resolve<F>(&self, name: Option<&str>, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match name.or(self.default_profile.as_deref()) {
            Some(name) => self.get_profile(name)?.clone(),
            None => ClientConfig::default(),
        };

        if let Some(url) = env(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(key) = env(ENV_API_KEY) {
            config.api_key = key;
        }
        if let Some(secret) = env(ENV_SECRET_KEY) {
            config.secret_key = secret;
        }

        config.validate().context(
            "缺少可用的连接配置，请使用 `cs profile add` 添加档案或设置 CLOUDSTACK_* 环境变量",
        )?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(url: &str) -> ProfileConfig {
        ClientConfig::new(url, "key", "secret")
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.profiles.is_empty());
        assert_eq!(config.default_profile, None);
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_add_remove_profile() {
        let mut config = CliConfig::default();

        config.add_profile("prod", profile("https://prod.example.com/client/api")).unwrap();
        assert_eq!(config.default_profile, Some("prod".to_string()));

        config.add_profile("lab", profile("http://10.0.0.5:8080/client/api")).unwrap();
        assert_eq!(config.profiles.len(), 2);
        assert_eq!(config.default_profile, Some("prod".to_string())); // 默认档案不变

        let names: Vec<_> = config.list_profiles().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["lab", "prod"]);

        config.remove_profile("prod").unwrap();
        assert_eq!(config.default_profile, None);
        assert!(config.remove_profile("prod").is_err());
    }

    #[test]
    fn test_duplicate_and_invalid_profile() {
        let mut config = CliConfig::default();
        config.add_profile("prod", profile("https://prod.example.com/client/api")).unwrap();
        assert!(config.add_profile("prod", profile("https://other.example.com")).is_err());
        assert!(config.add_profile("bad", profile("not a url")).is_err());
        assert!(config.set_default_profile("missing").is_err());
    }

    #[test]
    fn test_resolve_uses_default_profile() {
        let mut config = CliConfig::default();
        config.add_profile("prod", profile("https://prod.example.com/client/api")).unwrap();
        config.add_profile("lab", profile("http://10.0.0.5:8080/client/api")).unwrap();

        let resolved = config.resolve(None, no_env).unwrap();
        assert_eq!(resolved.api_url, "https://prod.example.com/client/api");

        let resolved = config.resolve(Some("lab"), no_env).unwrap();
        assert_eq!(resolved.api_url, "http://10.0.0.5:8080/client/api");

        assert!(config.resolve(Some("missing"), no_env).is_err());
    }

    #[test]
    fn test_resolve_env_overrides() {
        let mut config = CliConfig::default();
        config.add_profile("prod", profile("https://prod.example.com/client/api")).unwrap();

        let env = |key: &str| match key {
            ENV_SECRET_KEY => Some("from-env".to_string()),
            _ => None,
        };
        let resolved = config.resolve(None, env).unwrap();
        assert_eq!(resolved.api_url, "https://prod.example.com/client/api");
        assert_eq!(resolved.secret_key, "from-env");
    }

    #[test]
    fn test_resolve_env_only() {
        let config = CliConfig::default();
        assert!(config.resolve(None, no_env).is_err());

        let env = |key: &str| match key {
            ENV_API_URL => Some("https://cloud.example.com/client/api".to_string()),
            ENV_API_KEY => Some("k".to_string()),
            ENV_SECRET_KEY => Some("s".to_string()),
            _ => None,
        };
        let resolved = config.resolve(None, env).unwrap();
        assert_eq!(resolved.api_key, "k");
        assert!(resolved.wait_for_jobs);
    }

    #[test]
    fn test_toml_roundtrip_keeps_defaults() {
        let content = r#"
default_profile = "prod"

[profiles.prod]
api_url = "https://prod.example.com/client/api"
api_key = "key"
secret_key = "secret"
job_timeout = 600
"#;
        let config: CliConfig = toml::from_str(content).unwrap();
        let prod = config.get_profile("prod").unwrap();
        assert_eq!(prod.job_timeout, 600);
        assert!(prod.verify_ssl);
        assert_eq!(config.version, "1.0");
    }
}
