//! CloudStack 客户端错误定义

use thiserror::Error;

use crate::job::PendingJob;

/// CloudStack 客户端错误类型
#[derive(Error, Debug)]
pub enum CsError {
    #[error("HTTP 错误: {0}")]
    HttpError(String),

    /// 管理服务器返回的错误信封
    #[error("API 错误 [{code}/{cs_code}]: {text}")]
    ApiError {
        /// HTTP 状态码或 errorcode 字段
        code: u16,
        /// cserrorcode 字段
        cs_code: i64,
        /// errortext 字段
        text: String,
    },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 等待异步任务超时，任务可能仍在运行
    #[error("异步任务超时: {}", .0.job_id)]
    AsyncTimeout(Box<PendingJob>),

    /// 异步任务在服务器端执行失败
    #[error("异步任务 {job_id} 失败 [{code}]: {text}")]
    JobFailed {
        job_id: String,
        code: i64,
        text: String,
    },

    #[error("未找到 {kind}: {key} (结果数 {count})")]
    NotFound {
        kind: &'static str,
        key: String,
        count: i64,
    },

    #[error("无法精确匹配 {kind}: {key} (结果数 {count})")]
    Ambiguous {
        kind: &'static str,
        key: String,
        count: i64,
    },

    /// 按 ID 查询返回了多条记录
    #[error("{kind} ID 不唯一: {id} (结果数 {count})")]
    IdNotUnique {
        kind: &'static str,
        id: String,
        count: i64,
    },
}

impl CsError {
    /// 是否为异步任务超时
    pub fn is_timeout(&self) -> bool {
        matches!(self, CsError::AsyncTimeout(_))
    }

    /// 是否为查询不到资源
    pub fn is_not_found(&self) -> bool {
        matches!(self, CsError::NotFound { .. })
    }

    /// 超时时尚未完成的任务
    pub fn pending_job(&self) -> Option<&PendingJob> {
        match self {
            CsError::AsyncTimeout(job) => Some(job),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CsError {
    fn from(e: serde_json::Error) -> Self {
        CsError::ParseError(e.to_string())
    }
}

/// CloudStack 客户端结果类型
pub type Result<T> = std::result::Result<T, CsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CsError::ApiError {
            code: 431,
            cs_code: 4350,
            text: "Unable to execute API command".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API 错误 [431/4350]: Unable to execute API command"
        );
    }

    #[test]
    fn test_timeout_carries_pending_job() {
        let err = CsError::AsyncTimeout(Box::new(PendingJob {
            job_id: "job-1".to_string(),
            provisional: serde_json::json!({ "jobid": "job-1" }),
        }));
        assert!(err.is_timeout());
        assert!(!err.is_not_found());
        assert_eq!(err.pending_job().unwrap().job_id, "job-1");
    }
}
