//! CloudStack CLI 应用

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "cs")]
#[command(about = "CloudStack 管理服务器命令行工具", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 使用的配置档案，默认使用配置文件中的默认档案
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// JSON 格式输出
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 配置档案管理
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// 区域
    Zone {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// 域
    Domain {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// 项目
    Project {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// SSH 密钥对
    #[command(name = "ssh-key")]
    SshKey {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// 卷快照
    Snapshot {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// 全局配置项
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// 异步任务
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// 调用任意 API
    Call {
        /// API 命令名，例如 listVirtualMachines
        command: String,

        /// 参数，格式为 key=value
        params: Vec<String>,

        /// 使用 POST 发送
        #[arg(long)]
        post: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// 添加配置档案
    Add {
        /// 档案名称
        name: String,
        /// API 地址，例如 https://cloud.example.com/client/api
        #[arg(long)]
        url: String,
        /// API Key
        #[arg(long)]
        api_key: String,
        /// Secret Key
        #[arg(long)]
        secret_key: String,
        /// 不校验服务器证书
        #[arg(long)]
        insecure: bool,
    },
    /// 列出配置档案
    List,
    /// 移除配置档案
    Remove { name: String },
    /// 设置默认档案
    Default { name: String },
}

/// 资源查询的公共条件
#[derive(Args, Clone, Debug, Default)]
pub struct Scope {
    /// 项目名称或 ID
    #[arg(long)]
    project: Option<String>,

    /// 区域名称或 ID
    #[arg(long)]
    zone: Option<String>,

    /// 域 ID
    #[arg(long)]
    domain_id: Option<String>,
}

#[derive(Subcommand)]
pub enum ResourceAction {
    /// 列出资源
    List {
        #[command(flatten)]
        scope: Scope,

        /// 关键字过滤
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// 按名称或 ID 查询单个资源
    Get {
        /// 名称或 ID
        key: String,

        #[command(flatten)]
        scope: Scope,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// 列出配置项
    List {
        /// 配置项名称
        #[arg(short, long)]
        name: Option<String>,

        /// 分类
        #[arg(short, long)]
        category: Option<String>,
    },
    /// 修改配置项
    Set { name: String, value: String },
}

#[derive(Subcommand)]
pub enum JobAction {
    /// 查询任务状态
    Get { id: String },
    /// 等待任务结束
    Wait {
        id: String,
        /// 超时时间（秒）
        #[arg(short, long, default_value = "300")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("CloudStack CLI 启动");

    let profile = cli.profile.as_deref();
    let json = cli.json;

    // 处理命令
    match cli.command {
        Commands::Profile { action } => commands::profile::handle(action).await?,
        Commands::Zone { action } => commands::zone::handle(profile, action, json).await?,
        Commands::Domain { action } => commands::domain::handle(profile, action, json).await?,
        Commands::Project { action } => commands::project::handle(profile, action, json).await?,
        Commands::SshKey { action } => commands::ssh_key::handle(profile, action, json).await?,
        Commands::Snapshot { action } => commands::snapshot::handle(profile, action, json).await?,
        Commands::Config { action } => {
            commands::configuration::handle(profile, action, json).await?
        }
        Commands::Job { action } => commands::job::handle(profile, action, json).await?,
        Commands::Call {
            command,
            params,
            post,
        } => commands::call::handle(profile, &command, &params, post).await?,
    }

    Ok(())
}
