//! 异步任务记录

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `queryAsyncJobResult` / `listAsyncJobs` 返回的任务记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsyncJob {
    #[serde(rename = "accountid")]
    pub account_id: String,

    /// 任务对应的命令类名
    pub cmd: String,

    pub completed: String,

    pub created: String,

    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobinstanceid")]
    pub job_instance_id: String,

    #[serde(rename = "jobinstancetype")]
    pub job_instance_type: String,

    #[serde(rename = "jobprocstatus")]
    pub job_proc_status: i64,

    /// 任务结果，结构随命令而定
    #[serde(rename = "jobresult")]
    pub job_result: Value,

    #[serde(rename = "jobresultcode")]
    pub job_result_code: i64,

    #[serde(rename = "jobresulttype")]
    pub job_result_type: String,

    /// 0 进行中，1 成功，2 失败
    #[serde(rename = "jobstatus")]
    pub job_status: i64,

    #[serde(rename = "userid")]
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAsyncJobsResponse {
    pub count: i64,

    #[serde(rename = "asyncjobs")]
    pub async_jobs: Vec<AsyncJob>,
}
