//! 客户端配置

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CsError, Result};

/// CloudStack 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API 地址，例如 `https://cloud.example.com/client/api`
    pub api_url: String,

    /// API key
    pub api_key: String,

    /// Secret key
    pub secret_key: String,

    /// 是否验证 SSL 证书
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// 单次 HTTP 请求超时（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// 是否等待异步任务完成
    #[serde(default = "default_wait_for_jobs")]
    pub wait_for_jobs: bool,

    /// 异步任务等待超时（秒）
    #[serde(default = "default_job_timeout")]
    pub job_timeout: u64,

    /// 首次轮询间隔（秒），之后每轮加 1 秒
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,

    /// 轮询间隔上限（秒）
    #[serde(default = "default_max_poll_interval")]
    pub max_poll_interval: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl ClientConfig {
    pub fn new(api_url: &str, api_key: &str, secret_key: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            verify_ssl: default_verify_ssl(),
            request_timeout: default_request_timeout(),
            wait_for_jobs: default_wait_for_jobs(),
            job_timeout: default_job_timeout(),
            poll_interval: default_poll_interval(),
            max_poll_interval: default_max_poll_interval(),
        }
    }

    /// 检查必填项
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| CsError::ConfigError(format!("无效的 API 地址 {}: {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CsError::ConfigError(format!(
                "不支持的协议: {}",
                url.scheme()
            )));
        }
        if self.api_key.is_empty() {
            return Err(CsError::ConfigError("api_key 不能为空".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(CsError::ConfigError("secret_key 不能为空".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    pub fn max_poll_interval(&self) -> Duration {
        Duration::from_secs(self.max_poll_interval)
    }
}

// 默认值函数
fn default_verify_ssl() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    60
}

fn default_wait_for_jobs() -> bool {
    true
}

fn default_job_timeout() -> u64 {
    300
}

fn default_poll_interval() -> u64 {
    1
}

fn default_max_poll_interval() -> u64 {
    15
}
