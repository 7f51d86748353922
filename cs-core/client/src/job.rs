//! 异步任务跟踪
//!
//! 状态变更类调用在服务器端以异步任务执行，首个响应只带 `jobid`。
//! 客户端配置为等待任务时，通过 `queryAsyncJobResult` 轮询直到任务结束：
//!
//! ```text
//! Submitted -> Pending -> Succeeded
//!                      -> Failed
//!                      -> TimedOut
//! ```
//!
//! 超时后返回 [`CsError::AsyncTimeout`]，其中保留任务 ID 和临时响应，
//! 调用方可以稍后自行查询。

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::api::async_job::QueryAsyncJobResultParams;
use crate::client::CloudStackClient;
use crate::command::ApiCommand;
use crate::decode::decode;
use crate::error::{CsError, Result};
use crate::models::AsyncJob;

/// `jobstatus` 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => JobStatus::Succeeded,
            2 => JobStatus::Failed,
            _ => JobStatus::Pending,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            JobStatus::Pending => 0,
            JobStatus::Succeeded => 1,
            JobStatus::Failed => 2,
        }
    }
}

/// 客户端视角的任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Submitted,
    Pending,
    Succeeded,
    Failed,
    TimedOut,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed | JobState::TimedOut)
    }
}

impl From<JobStatus> for JobState {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => JobState::Pending,
            JobStatus::Succeeded => JobState::Succeeded,
            JobStatus::Failed => JobState::Failed,
        }
    }
}

/// 等待超时的任务
#[derive(Debug, Clone)]
pub struct PendingJob {
    /// 任务 ID
    pub job_id: String,

    /// 提交时的临时响应
    pub provisional: Value,
}

impl PendingJob {
    /// 把临时响应解码为调用的响应类型
    pub fn provisional<T: DeserializeOwned>(&self) -> Result<T> {
        decode(self.provisional.clone())
    }
}

/// 轮询策略
///
/// 第 n 轮（从 0 开始）等待 `initial + n` 秒，不超过 `max`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub timeout: Duration,
    pub initial: Duration,
    pub max: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            initial: Duration::from_secs(1),
            max: Duration::from_secs(15),
        }
    }
}

impl PollPolicy {
    pub fn delay(&self, round: u32) -> Duration {
        self.initial
            .saturating_add(Duration::from_secs(u64::from(round)))
            .min(self.max)
    }
}

impl CloudStackClient {
    /// 轮询任务直到结束或超时，返回任务结果 `jobresult`
    ///
    /// 超时返回的 [`PendingJob`] 中 `provisional` 为最后一次查询到的任务记录。
    pub async fn wait_for_job(&self, job_id: &str) -> Result<Value> {
        let policy = self.poll_policy();
        let started = Instant::now();
        let mut round = 0u32;

        loop {
            // 不能经由 execute：execute 等待任务时会回到这里
            let params = QueryAsyncJobResultParams::new(job_id);
            let value = self
                .dispatch(
                    QueryAsyncJobResultParams::COMMAND,
                    QueryAsyncJobResultParams::METHOD,
                    params.to_query_params(),
                )
                .await?;
            let job: AsyncJob = decode(value)?;

            match JobStatus::from_code(job.job_status) {
                JobStatus::Succeeded => {
                    info!("异步任务完成: {}", job_id);
                    return Ok(job.job_result);
                }
                JobStatus::Failed => return Err(job_failure(job_id, &job)),
                JobStatus::Pending => {}
            }

            if started.elapsed() >= policy.timeout {
                return Err(CsError::AsyncTimeout(Box::new(PendingJob {
                    job_id: job_id.to_string(),
                    provisional: serde_json::to_value(&job)?,
                })));
            }

            // 最后一次等待不越过超时时间
            let remaining = policy.timeout.saturating_sub(started.elapsed());
            let delay = policy.delay(round).min(remaining);
            debug!("异步任务 {} 未完成，{:?} 后重试", job_id, delay);
            sleep(delay).await;
            round = round.saturating_add(1);
        }
    }
}

/// 从失败任务的结果中提取错误
fn job_failure(job_id: &str, job: &AsyncJob) -> CsError {
    let (code, text) = match &job.job_result {
        Value::Object(map) => (
            map.get("errorcode").and_then(Value::as_i64).unwrap_or(job.job_result_code),
            map.get("errortext")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| job.job_result.to_string()),
        ),
        Value::String(s) => (job.job_result_code, s.clone()),
        other => (job.job_result_code, format!("未定义的错误: {}", other)),
    };

    CsError::JobFailed {
        job_id: job_id.to_string(),
        code,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(JobStatus::from_code(0), JobStatus::Pending);
        assert_eq!(JobStatus::from_code(1), JobStatus::Succeeded);
        assert_eq!(JobStatus::from_code(2), JobStatus::Failed);
        assert_eq!(JobStatus::Failed.code(), 2);
        assert!(JobState::from(JobStatus::Failed).is_terminal());
        assert!(!JobState::Submitted.is_terminal());
    }

    #[test]
    fn test_poll_delay_backoff() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay(0), Duration::from_secs(1));
        assert_eq!(policy.delay(1), Duration::from_secs(2));
        assert_eq!(policy.delay(13), Duration::from_secs(14));
        assert_eq!(policy.delay(14), Duration::from_secs(15));
        assert_eq!(policy.delay(100), Duration::from_secs(15));
    }

    #[test]
    fn test_poll_delay_saturates() {
        let policy = PollPolicy {
            timeout: Duration::from_secs(300),
            initial: Duration::from_secs(u64::MAX),
            max: Duration::from_secs(15),
        };
        assert_eq!(policy.delay(0), Duration::from_secs(15));
        assert_eq!(policy.delay(u32::MAX), Duration::from_secs(15));
    }

    #[test]
    fn test_job_failure_object() {
        let job = AsyncJob {
            job_status: 2,
            job_result_code: 530,
            job_result: json!({ "errorcode": 530, "errortext": "Volume is busy" }),
            ..Default::default()
        };
        match job_failure("j1", &job) {
            CsError::JobFailed { job_id, code, text } => {
                assert_eq!(job_id, "j1");
                assert_eq!(code, 530);
                assert_eq!(text, "Volume is busy");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_job_failure_text() {
        let job = AsyncJob {
            job_status: 2,
            job_result_code: 530,
            job_result: json!("snapshot failed"),
            ..Default::default()
        };
        assert!(matches!(
            job_failure("j1", &job),
            CsError::JobFailed { code: 530, ref text, .. } if text == "snapshot failed"
        ));
    }

    #[test]
    fn test_pending_job_decodes_provisional() {
        #[derive(serde::Deserialize)]
        struct Provisional {
            jobid: String,
        }
        let pending = PendingJob {
            job_id: "j9".to_string(),
            provisional: json!({ "jobid": "j9" }),
        };
        let p: Provisional = pending.provisional().unwrap();
        assert_eq!(p.jobid, "j9");
    }
}
