//! CloudStack 客户端核心实现

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::api::{
    AsyncJobService, ConfigurationService, DomainService, ProjectService, SnapshotService,
    SshService, ZoneService,
};
use crate::command::{ApiCommand, HttpMethod, ResponseShape};
use crate::config::ClientConfig;
use crate::decode::{decode, merge_job_result, raw_value, strip_envelope};
use crate::error::{CsError, Result};
use crate::job::{PendingJob, PollPolicy};
use crate::params::QueryParams;
use crate::transport::{HttpTransport, Transport};

/// 发送前修改请求参数的钩子
pub type RequestHook = Arc<dyn Fn(&mut QueryParams) + Send + Sync>;

/// CloudStack 客户端
///
/// 各服务通过 `client.zone()`、`client.snapshot()` 等方法获取，
/// 服务只持有对客户端的引用。
#[derive(Clone)]
pub struct CloudStackClient {
    /// 传输层
    transport: Arc<dyn Transport>,

    /// 是否等待异步任务完成
    wait_for_jobs: bool,

    /// 轮询策略
    poll: PollPolicy,

    /// 请求钩子，按添加顺序执行
    hooks: Vec<RequestHook>,
}

impl fmt::Debug for CloudStackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudStackClient")
            .field("wait_for_jobs", &self.wait_for_jobs)
            .field("poll", &self.poll)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl CloudStackClient {
    /// 按配置创建基于 HTTP 的客户端
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        info!("创建 CloudStack 客户端: {}", config.api_url);

        Ok(Self::with_transport(Arc::new(transport))
            .wait_for_jobs(config.wait_for_jobs)
            .poll_policy_with(PollPolicy {
                timeout: config.job_timeout(),
                initial: config.poll_interval(),
                max: config.max_poll_interval(),
            }))
    }

    /// 使用自定义传输层创建客户端
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            wait_for_jobs: true,
            poll: PollPolicy::default(),
            hooks: Vec::new(),
        }
    }

    /// 设置是否等待异步任务
    pub fn wait_for_jobs(mut self, wait: bool) -> Self {
        self.wait_for_jobs = wait;
        self
    }

    /// 设置异步任务等待超时
    pub fn job_timeout(mut self, timeout: Duration) -> Self {
        self.poll.timeout = timeout;
        self
    }

    /// 设置完整的轮询策略
    pub fn poll_policy_with(mut self, policy: PollPolicy) -> Self {
        self.poll = policy;
        self
    }

    /// 添加请求钩子
    pub fn with_request_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut QueryParams) + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn is_waiting_for_jobs(&self) -> bool {
        self.wait_for_jobs
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    /// 获取异步任务 API
    pub fn async_job(&self) -> AsyncJobService<'_> {
        AsyncJobService::new(self)
    }

    /// 获取全局配置 API
    pub fn configuration(&self) -> ConfigurationService<'_> {
        ConfigurationService::new(self)
    }

    /// 获取域管理 API
    pub fn domain(&self) -> DomainService<'_> {
        DomainService::new(self)
    }

    /// 获取项目管理 API
    pub fn project(&self) -> ProjectService<'_> {
        ProjectService::new(self)
    }

    /// 获取快照管理 API
    pub fn snapshot(&self) -> SnapshotService<'_> {
        SnapshotService::new(self)
    }

    /// 获取 SSH 密钥对 API
    pub fn ssh(&self) -> SshService<'_> {
        SshService::new(self)
    }

    /// 获取区域管理 API
    pub fn zone(&self) -> ZoneService<'_> {
        ZoneService::new(self)
    }

    /// 执行一个 API 调用并解码响应
    pub async fn execute<C: ApiCommand>(&self, command: &C) -> Result<C::Response> {
        self.execute_with(command, QueryParams::new()).await
    }

    /// 执行 API 调用，`extra` 中的参数覆盖同名参数
    pub(crate) async fn execute_with<C: ApiCommand>(
        &self,
        command: &C,
        extra: QueryParams,
    ) -> Result<C::Response> {
        let mut params = command.to_query_params();
        params.extend(extra);

        let value = self.dispatch(C::COMMAND, C::METHOD, params).await?;

        match C::SHAPE {
            ResponseShape::Plain => decode(value),
            ResponseShape::Wrapped => decode(raw_value(value)?),
            ResponseShape::Async => self.complete_job(C::COMMAND, value, false).await,
            ResponseShape::AsyncWrapped => self.complete_job(C::COMMAND, value, true).await,
        }
    }

    /// 执行未做类型绑定的调用，返回剥掉信封后的 JSON
    ///
    /// 响应带 `jobid` 且客户端配置为等待任务时，返回任务结果。
    /// 任务记录本身（带 `jobstatus`，如 `queryAsyncJobResult` 的响应）原样返回。
    pub async fn call_raw(
        &self,
        command: &str,
        method: HttpMethod,
        params: QueryParams,
    ) -> Result<Value> {
        let value = self.dispatch(command, method, params).await?;

        match submitted_job(&value) {
            Some(job_id) if self.wait_for_jobs => {
                let result = self.wait_for_job(&job_id).await;
                match result {
                    Err(CsError::AsyncTimeout(_)) => Err(CsError::AsyncTimeout(Box::new(
                        PendingJob {
                            job_id,
                            provisional: value,
                        },
                    ))),
                    other => other,
                }
            }
            _ => Ok(value),
        }
    }

    /// 发送请求并剥掉 `<command>response` 信封
    pub(crate) async fn dispatch(
        &self,
        command: &str,
        method: HttpMethod,
        mut params: QueryParams,
    ) -> Result<Value> {
        params.insert("command", command);
        for hook in &self.hooks {
            hook(&mut params);
        }

        debug!("执行 API 调用: {} ({})", command, method.as_str());
        let body = self.transport.send(method, params).await?;
        strip_envelope(&body)
    }

    /// 异步任务完成协议
    async fn complete_job<T>(&self, command: &str, provisional: Value, unwrap: bool) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !self.wait_for_jobs {
            return decode(provisional);
        }

        let job_id = provisional
            .get("jobid")
            .and_then(Value::as_str)
            .ok_or_else(|| CsError::ParseError(format!("{} 响应中缺少 jobid", command)))?
            .to_string();
        debug!("等待异步任务: {} ({})", job_id, command);

        match self.wait_for_job(&job_id).await {
            Ok(result) => {
                let result = if unwrap { raw_value(result)? } else { result };
                decode(merge_job_result(&provisional, result))
            }
            Err(CsError::AsyncTimeout(_)) => {
                warn!("异步任务等待超时: {} ({})", job_id, command);
                Err(CsError::AsyncTimeout(Box::new(PendingJob {
                    job_id,
                    provisional,
                })))
            }
            Err(e) => Err(e),
        }
    }
}

/// 提交异步任务后返回的临时响应中的任务 ID
///
/// 带 `jobstatus` 或 `jobresult` 的是任务记录，不是临时响应。
fn submitted_job(value: &Value) -> Option<String> {
    if value.get("jobstatus").is_some() || value.get("jobresult").is_some() {
        return None;
    }
    value.get("jobid").and_then(Value::as_str).map(str::to_string)
}
