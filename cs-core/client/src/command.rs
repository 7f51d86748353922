//! API 调用描述
//!
//! 每个 CloudStack 调用只在三点上不同：命令名、HTTP 方法、响应形态。
//! [`ApiCommand`] 把这三点连同响应类型绑定到参数结构体上，
//! 由 [`CloudStackClient::execute`](crate::CloudStackClient::execute) 统一处理。

use serde::de::DeserializeOwned;

use crate::params::QueryParams;

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// 响应形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `<command>response` 的内容即为结果
    Plain,
    /// 结果再包了一层单键对象，例如 `{"domain": {...}}`
    Wrapped,
    /// 异步任务，任务结果直接解码
    Async,
    /// 异步任务，任务结果需剥掉一层单键对象
    AsyncWrapped,
}

impl ResponseShape {
    pub fn is_async(&self) -> bool {
        matches!(self, ResponseShape::Async | ResponseShape::AsyncWrapped)
    }
}

/// 一个 CloudStack API 调用
pub trait ApiCommand: Send + Sync {
    /// 解码目标类型
    type Response: DeserializeOwned + Send;

    /// API 命令名，例如 `listZones`
    const COMMAND: &'static str;

    const METHOD: HttpMethod;

    const SHAPE: ResponseShape;

    /// 渲染调用参数（不含 `command`、`apiKey` 等公共参数）
    fn to_query_params(&self) -> QueryParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_shapes() {
        assert!(ResponseShape::Async.is_async());
        assert!(ResponseShape::AsyncWrapped.is_async());
        assert!(!ResponseShape::Plain.is_async());
        assert!(!ResponseShape::Wrapped.is_async());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }
}
