//! 异步任务 API

use tracing::info;

use crate::client::CloudStackClient;
use crate::error::Result;
use crate::models::{AsyncJob, ListAsyncJobsResponse};
use crate::params::api_params;

api_params! {
    /// 查询异步任务结果
    QueryAsyncJobResultParams("queryAsyncJobResult", Get, Plain) -> AsyncJob {
        job_id: String => "jobid",
    }

    /// 查询异步任务列表
    ListAsyncJobsParams("listAsyncJobs", Get, Plain) -> ListAsyncJobsResponse {
        account: String => "account",
        domain_id: String => "domainid",
        is_recursive: bool => "isrecursive",
        keyword: String => "keyword",
        list_all: bool => "listall",
        page: i64 => "page",
        page_size: i64 => "pagesize",
        start_date: String => "startdate",
    }
}

impl QueryAsyncJobResultParams {
    pub fn new(job_id: &str) -> Self {
        let mut p = Self::default();
        p.set_job_id(job_id);
        p
    }
}

impl ListAsyncJobsParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 异步任务 API
pub struct AsyncJobService<'a> {
    client: &'a CloudStackClient,
}

impl<'a> AsyncJobService<'a> {
    /// 创建新的异步任务 API 实例
    pub(crate) fn new(client: &'a CloudStackClient) -> Self {
        Self { client }
    }

    /// 查询异步任务结果（单次查询，不等待）
    pub async fn query_async_job_result(&self, p: &QueryAsyncJobResultParams) -> Result<AsyncJob> {
        info!("查询异步任务: {:?}", p.job_id());
        self.client.execute(p).await
    }

    /// 查询异步任务列表
    pub async fn list_async_jobs(&self, p: &ListAsyncJobsParams) -> Result<ListAsyncJobsResponse> {
        info!("查询异步任务列表");
        self.client.execute(p).await
    }
}
