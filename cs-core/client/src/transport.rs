//! HTTP 传输层
//!
//! [`Transport`] 负责把一组参数发送到管理服务器并返回原始响应体。
//! 默认实现 [`HttpTransport`] 基于 reqwest，负责补充 `apiKey`/`response`
//! 公共参数并签名；测试中可替换为内存实现。

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::command::HttpMethod;
use crate::config::ClientConfig;
use crate::decode::{lenient, strip_envelope};
use crate::error::{CsError, Result};
use crate::params::QueryParams;
use crate::sign;

/// 传输层抽象
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送请求，`params` 已包含 `command`
    ///
    /// 成功时返回完整的 JSON 响应体（含 `<command>response` 信封）。
    async fn send(&self, method: HttpMethod, params: QueryParams) -> Result<Vec<u8>>;
}

/// 基于 reqwest 的签名 HTTP 传输
pub struct HttpTransport {
    /// API 地址
    api_url: String,

    api_key: String,

    secret_key: String,

    /// HTTP 客户端
    http_client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| CsError::HttpError(e.to_string()))?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            http_client,
        })
    }

    /// 补充公共参数并签名
    fn signed_query(&self, mut params: QueryParams) -> Result<String> {
        params.insert("apiKey", self.api_key.clone());
        params.insert("response", "json");
        sign::signed_query(&params, &self.secret_key)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: HttpMethod, params: QueryParams) -> Result<Vec<u8>> {
        let command = params.get("command").unwrap_or_default().to_string();
        debug!("CloudStack API 请求: {} {}", method.as_str(), command);

        let query = self.signed_query(params)?;
        let request = match method {
            HttpMethod::Get => self
                .http_client
                .get(format!("{}?{}", self.api_url, query)),
            HttpMethod::Post => self
                .http_client
                .post(&self.api_url)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(query),
        };

        let response = request
            .send()
            .await
            .map_err(|e| CsError::HttpError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| CsError::HttpError(e.to_string()))?;

        if !status.is_success() {
            warn!(
                "API 请求失败: {} {} - {}",
                command,
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(parse_api_error(status.as_u16(), &body));
        }

        Ok(body.to_vec())
    }
}

/// 错误信封
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorEnvelope {
    #[serde(deserialize_with = "lenient::i64_or_string")]
    errorcode: i64,
    #[serde(deserialize_with = "lenient::i64_or_string")]
    cserrorcode: i64,
    errortext: String,
}

/// 把非 2xx 响应体解析为 [`CsError::ApiError`]
pub(crate) fn parse_api_error(status: u16, body: &[u8]) -> CsError {
    let envelope = strip_envelope(body)
        .and_then(|v| serde_json::from_value::<ErrorEnvelope>(v).map_err(CsError::from));

    match envelope {
        Ok(e) if !e.errortext.is_empty() => CsError::ApiError {
            code: u16::try_from(e.errorcode).ok().filter(|c| *c != 0).unwrap_or(status),
            cs_code: e.cserrorcode,
            text: e.errortext,
        },
        _ => CsError::ApiError {
            code: status,
            cs_code: 0,
            text: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_error_envelope() {
        let body = br#"{"listzonesresponse":{"uuidList":[],"errorcode":431,"cserrorcode":9999,"errortext":"Unable to find zone"}}"#;
        match parse_api_error(431, body) {
            CsError::ApiError { code, cs_code, text } => {
                assert_eq!(code, 431);
                assert_eq!(cs_code, 9999);
                assert_eq!(text, "Unable to find zone");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_api_error_raw_body() {
        match parse_api_error(502, b"Bad Gateway") {
            CsError::ApiError { code, cs_code, text } => {
                assert_eq!(code, 502);
                assert_eq!(cs_code, 0);
                assert_eq!(text, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_signed_query_adds_common_params() {
        let config = ClientConfig::new("https://cloud.example.com/client/api/", "my-key", "my-secret");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.api_url, "https://cloud.example.com/client/api");

        let params: QueryParams = [("command", "listZones")].into_iter().collect();
        let query = transport.signed_query(params).unwrap();
        assert!(query.starts_with("apiKey=my-key&command=listZones&response=json&signature="));
    }

    #[test]
    fn test_transport_rejects_invalid_config() {
        let config = ClientConfig::new("https://cloud.example.com/client/api", "", "s");
        assert!(HttpTransport::new(&config).is_err());
    }
}
