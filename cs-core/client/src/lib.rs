//! CloudStack 管理服务器 API 客户端
//!
//! 提供对 CloudStack 管理服务器 REST API 的类型化访问。
//!
//! # 功能
//!
//! - **请求签名**: HMAC-SHA1 签名的 GET/POST 请求
//! - **异步任务**: 自动轮询 `queryAsyncJobResult`，超时时返回任务 ID 和临时响应
//! - **响应解码**: 剥离响应信封，容忍字段类型不一致
//! - **按名称/ID 查询**: 在列表调用之上定位单条记录
//! - **服务**: 异步任务、全局配置、域、项目、区域、快照、SSH 密钥对
//!
//! # 示例
//!
//! ```ignore
//! use cs_client::{ClientConfig, CloudStackClient, ListOption};
//! use cs_client::api::snapshot::CreateSnapshotParams;
//!
//! let config = ClientConfig::new("https://cloud.example.com/client/api", "api-key", "secret");
//! let client = CloudStackClient::new(&config)?;
//!
//! // 按名称查询区域
//! let zone = client.zone().get_zone_by_name("zone-a", &[]).await?;
//!
//! // 在指定项目中查询域
//! let domain = client
//!     .domain()
//!     .get_domain_by_name("ops", &[ListOption::project("infra")])
//!     .await?;
//!
//! // 创建卷快照，默认等待异步任务完成
//! let snapshot = client
//!     .snapshot()
//!     .create_snapshot(&CreateSnapshotParams::new("volume-id"))
//!     .await?;
//! ```

pub mod api;
pub mod client;
pub mod command;
pub mod config;
pub mod decode;
pub mod error;
pub mod job;
pub mod lookup;
pub mod models;
pub mod params;
pub mod sign;
pub mod transport;

pub use client::{CloudStackClient, RequestHook};
pub use command::{ApiCommand, HttpMethod, ResponseShape};
pub use config::ClientConfig;
pub use error::{CsError, Result};
pub use job::{JobState, JobStatus, PendingJob, PollPolicy};
pub use lookup::{is_id, ListOption, Listing, Resource};
pub use params::QueryParams;
pub use transport::{HttpTransport, Transport};

// 导出 API 服务
pub use api::{
    AsyncJobService, ConfigurationService, DomainService, ProjectService, SnapshotService,
    SshService, ZoneService,
};

// 导出数据模型
pub use models::{
    AsyncJob, Configuration, Domain, Project, Snapshot, SnapshotPolicy, SshKeyPair,
    SuccessResponse, Tag, VirtualMachine, VmSnapshot, Zone,
};
