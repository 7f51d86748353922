//! 异步任务命令

use anyhow::Result;
use colored::Colorize;
use cs_client::api::async_job::QueryAsyncJobResultParams;
use cs_client::{AsyncJob, JobStatus};
use std::time::Duration;

use super::common::create_client;
use super::output::{output_one, print_json, TableRow};
use crate::JobAction;

impl TableRow for AsyncJob {
    fn headers() -> Vec<&'static str> {
        vec!["JOB", "COMMAND", "STATUS", "CREATED", "RESULT"]
    }

    fn row(&self) -> Vec<String> {
        let status = match JobStatus::from_code(self.job_status) {
            JobStatus::Pending => "pending",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
        };
        vec![
            self.job_id.clone(),
            self.cmd.clone(),
            status.to_string(),
            self.created.clone(),
            self.job_result.to_string(),
        ]
    }
}

pub async fn handle(profile: Option<&str>, action: JobAction, json: bool) -> Result<()> {
    match action {
        JobAction::Get { id } => {
            let client = create_client(profile)?;
            let job = client
                .async_job()
                .query_async_job_result(&QueryAsyncJobResultParams::new(&id))
                .await?;
            output_one(&job, json)
        }
        JobAction::Wait { id, timeout } => {
            let client = create_client(profile)?.job_timeout(Duration::from_secs(timeout));
            match client.wait_for_job(&id).await {
                Ok(result) => print_json(&result),
                Err(e) if e.is_timeout() => {
                    println!(
                        "{} 任务 {} 在 {} 秒内未结束",
                        "!".yellow().bold(),
                        id.cyan(),
                        timeout
                    );
                    Err(e.into())
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}
