//! 任意 API 调用

use anyhow::Result;
use cs_client::{CsError, HttpMethod, QueryParams};
use tracing::info;

use super::common::{create_client, parse_key_value};
use super::output::print_json;

pub async fn handle(profile: Option<&str>, command: &str, args: &[String], post: bool) -> Result<()> {
    let params = args
        .iter()
        .map(|arg| parse_key_value(arg))
        .collect::<Result<QueryParams>>()?;
    let method = if post { HttpMethod::Post } else { HttpMethod::Get };

    let client = create_client(profile)?;
    info!("调用 {} ({} 个参数)", command, params.len());

    match client.call_raw(command, method, params).await {
        Ok(value) => print_json(&value),
        Err(CsError::AsyncTimeout(job)) => {
            eprintln!(
                "任务 {} 尚未结束，可使用 `cs job get {}` 查询",
                job.job_id, job.job_id
            );
            print_json(&job.provisional)
        }
        Err(e) => Err(e.into()),
    }
}
