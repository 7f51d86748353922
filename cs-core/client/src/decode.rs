//! 响应解码
//!
//! 管理服务器的响应有几处不规整：
//! - 所有结果都包在 `<command>response` 单键对象里
//! - 部分调用和任务结果再包一层，例如 `{"snapshot": {...}}`
//! - 个别字段类型不固定，布尔值可能是字符串 `"true"`，ID 可能是浮点数
//!
//! 前两项由 [`raw_value`] 处理，字段类型由 [`lenient`] 中的反序列化函数处理。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CsError, Result};

/// 剥掉一层单键对象，返回其中的值
pub fn raw_value(value: Value) -> Result<Value> {
    match value {
        Value::Object(map) if map.len() == 1 => {
            Ok(map.into_iter().next().map(|(_, v)| v).unwrap_or_default())
        }
        Value::Object(map) => Err(CsError::ParseError(format!(
            "期望单键对象，实际有 {} 个键",
            map.len()
        ))),
        other => Err(CsError::ParseError(format!("期望 JSON 对象，实际为: {}", other))),
    }
}

/// 解析原始响应并剥掉 `<command>response` 信封
pub fn strip_envelope(body: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(body)?;
    raw_value(value)
}

/// 把任务最终结果叠加到临时响应上
///
/// 临时响应中的 `jobid`、`jobstatus` 等字段在最终结果里没有，叠加后保留。
pub fn merge_job_result(provisional: &Value, result: Value) -> Value {
    match (provisional, result) {
        (Value::Object(base), Value::Object(overlay)) => {
            let mut merged = base.clone();
            merged.extend(overlay);
            Value::Object(merged)
        }
        (_, result) => result,
    }
}

/// 解码为目标类型
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| CsError::ParseError(e.to_string()))
}

/// 容忍服务器端类型不一致的字段反序列化函数
///
/// 用法: `#[serde(default, deserialize_with = "lenient::bool_or_string")]`
pub mod lenient {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(bool),
        Int(i64),
        Float(f64),
        Str(String),
    }

    /// 布尔值，接受 `true` 或 `"true"`
    pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(false),
            Some(Loose::Bool(b)) => Ok(b),
            Some(Loose::Str(s)) => match s.to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" | "" => Ok(false),
                other => Err(de::Error::custom(format!("无效的布尔值: {}", other))),
            },
            Some(Loose::Int(i)) => Ok(i != 0),
            Some(Loose::Float(_)) => Err(de::Error::custom("无效的布尔值: 浮点数")),
        }
    }

    /// 字符串，数字转为十进制字符串（`12.0` 转为 `"12"`）
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(String::new()),
            Some(Loose::Str(s)) => Ok(s),
            Some(Loose::Int(i)) => Ok(i.to_string()),
            Some(Loose::Float(f)) if f.fract() == 0.0 => Ok((f as i64).to_string()),
            Some(Loose::Float(f)) => Ok(f.to_string()),
            Some(Loose::Bool(b)) => Ok(b.to_string()),
        }
    }

    /// 整数，接受数字或数字字符串
    pub fn i64_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Loose::Int(i)) => Ok(i),
            Some(Loose::Float(f)) => Ok(f as i64),
            Some(Loose::Str(s)) if s.is_empty() => Ok(0),
            Some(Loose::Str(s)) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("无效的整数: {}", s))),
            Some(Loose::Bool(_)) => Err(de::Error::custom("无效的整数: 布尔值")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "lenient::bool_or_string")]
        success: bool,
        #[serde(deserialize_with = "lenient::string_or_number")]
        ostypeid: String,
        #[serde(deserialize_with = "lenient::i64_or_string")]
        count: i64,
    }

    #[test]
    fn test_bool_from_string() {
        let s: Sample = decode(json!({ "success": "true" })).unwrap();
        assert!(s.success);
        let s: Sample = decode(json!({ "success": "false" })).unwrap();
        assert!(!s.success);
        let s: Sample = decode(json!({ "success": true })).unwrap();
        assert!(s.success);
        assert!(decode::<Sample>(json!({ "success": "maybe" })).is_err());
    }

    #[test]
    fn test_number_to_string() {
        let s: Sample = decode(json!({ "ostypeid": 142.0 })).unwrap();
        assert_eq!(s.ostypeid, "142");
        let s: Sample = decode(json!({ "ostypeid": 7 })).unwrap();
        assert_eq!(s.ostypeid, "7");
        let s: Sample = decode(json!({ "ostypeid": "a1b2-c3" })).unwrap();
        assert_eq!(s.ostypeid, "a1b2-c3");
    }

    #[test]
    fn test_missing_and_null_fields() {
        let s: Sample = decode(json!({ "ostypeid": null })).unwrap();
        assert_eq!(s.ostypeid, "");
        assert!(!s.success);
        assert_eq!(s.count, 0);
    }

    #[test]
    fn test_int_from_string() {
        let s: Sample = decode(json!({ "count": "3" })).unwrap();
        assert_eq!(s.count, 3);
    }

    #[test]
    fn test_raw_value() {
        let v = raw_value(json!({ "domain": { "id": "d1" } })).unwrap();
        assert_eq!(v, json!({ "id": "d1" }));

        assert!(raw_value(json!({ "a": 1, "b": 2 })).is_err());
        assert!(raw_value(json!([1, 2])).is_err());
    }

    #[test]
    fn test_strip_envelope_empty_listing() {
        let v = strip_envelope(br#"{"listzonesresponse":{}}"#).unwrap();
        assert_eq!(v, json!({}));
    }

    #[test]
    fn test_merge_keeps_job_fields() {
        let provisional = json!({ "jobid": "j1", "id": "s1" });
        let result = json!({ "id": "s1", "name": "snap", "state": "BackedUp" });
        let merged = merge_job_result(&provisional, result);
        assert_eq!(merged["jobid"], "j1");
        assert_eq!(merged["name"], "snap");
        assert_eq!(merged["state"], "BackedUp");
    }
}
