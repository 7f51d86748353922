//! CLI 命令处理模块

pub mod call;
pub mod common; // 公共工具函数
pub mod configuration;
pub mod domain;
pub mod job;
pub mod output;
pub mod profile;
pub mod project;
pub mod snapshot;
pub mod ssh_key;
pub mod zone;
