//! CloudStack API 服务
//!
//! 每个服务对应管理服务器的一个功能区域：
//! - 异步任务 (AsyncJobService)
//! - 全局配置 (ConfigurationService)
//! - 域管理 (DomainService)
//! - 项目管理 (ProjectService)
//! - 快照管理 (SnapshotService)
//! - SSH 密钥对 (SshService)
//! - 区域管理 (ZoneService)

pub mod async_job;
pub mod configuration;
pub mod domain;
pub mod project;
pub mod snapshot;
pub mod ssh;
pub mod zone;

pub use async_job::AsyncJobService;
pub use configuration::ConfigurationService;
pub use domain::DomainService;
pub use project::ProjectService;
pub use snapshot::SnapshotService;
pub use ssh::SshService;
pub use zone::ZoneService;
