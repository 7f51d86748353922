//! 请求签名
//!
//! 签名算法：对按键名排序、URL 编码后的完整查询串整体转小写，
//! 以 secret key 做 HMAC-SHA1，再做 base64 编码。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{CsError, Result};
use crate::params::QueryParams;

type HmacSha1 = Hmac<Sha1>;

/// 计算签名
pub fn signature(params: &QueryParams, secret_key: &str) -> Result<String> {
    let payload = params.encode().to_lowercase();

    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| CsError::ConfigError(format!("无效的 secret key: {}", e)))?;
    mac.update(payload.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// 生成带签名的查询串
pub fn signed_query(params: &QueryParams, secret_key: &str) -> Result<String> {
    let sig = signature(params, secret_key)?;
    Ok(format!("{}&signature={}", params.encode(), urlencoding::encode(&sig)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryParams {
        [
            ("command", "listUsers"),
            ("response", "json"),
            ("apiKey", "plgWJfZK4gyS3mOMTVmjUVg-X-jlWlnfaUJ9GAbBbf9EdM-kAYMmAiLqzzq1ElZLYq_u38zCm0bewzGUdP66mg"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = signature(&sample(), "secret").unwrap();
        let b = signature(&sample(), "secret").unwrap();
        assert_eq!(a, b);
        // HMAC-SHA1 摘要 20 字节，base64 后 28 个字符
        assert_eq!(a.len(), 28);
    }

    #[test]
    fn test_signature_known_vector() {
        let secret = "VDaACYb0LV9eNjTetIOElcVQkvJck_J_QljX_FcHRj87ZKiy0z0ty0ZsYBkoXkY9b7eq1EhwJaw7FF3akA3KBQ";
        assert_eq!(
            signature(&sample(), secret).unwrap(),
            "TTpdDq/7j/J58XCRHomKoQXEQds="
        );
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let a = signature(&sample(), "secret-a").unwrap();
        let b = signature(&sample(), "secret-b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_signature_ignores_case() {
        let upper: QueryParams = [("command", "listZones"), ("name", "ZONE-A")]
            .into_iter()
            .collect();
        let lower: QueryParams = [("command", "listzones"), ("name", "zone-a")]
            .into_iter()
            .collect();
        assert_eq!(
            signature(&upper, "k").unwrap(),
            signature(&lower, "k").unwrap()
        );
    }

    #[test]
    fn test_signed_query_appends_signature() {
        let query = signed_query(&sample(), "secret").unwrap();
        assert!(query.starts_with("apiKey="));
        assert!(query.contains("&command=listUsers&response=json&signature="));
    }
}
