//! 请求参数
//!
//! 每个 API 调用对应一个强类型参数结构体，由 [`api_params!`] 生成：
//! - `set_<field>(value)`: 设置参数
//! - `<field>()`: 读取参数，未设置时返回 `None`
//! - `reset_<field>()`: 清除参数
//!
//! 发送前统一渲染为按键名排序的 [`QueryParams`]，保证同一组参数的编码结果稳定。

use std::collections::BTreeMap;

/// 已渲染的查询参数（按键名排序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 合并另一组参数，同名参数以 `other` 为准
    pub fn extend(&mut self, other: QueryParams) {
        self.inner.extend(other.inner);
    }

    /// 编码为 URL 查询字符串
    ///
    /// 空格编码为 `%20` 而不是 `+`，签名计算依赖这一点。
    pub fn encode(&self) -> String {
        self.inner
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// 参数值的渲染方式
pub trait ParamValue {
    fn write_to(&self, name: &str, params: &mut QueryParams);
}

impl ParamValue for String {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, self.clone());
    }
}

impl ParamValue for bool {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, if *self { "true" } else { "false" });
    }
}

impl ParamValue for i64 {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, self.to_string());
    }
}

impl ParamValue for i32 {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, self.to_string());
    }
}

impl ParamValue for Vec<String> {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, self.join(","));
    }
}

/// 映射参数渲染为 `name[i].key` / `name[i].value`，按键名顺序编号
impl ParamValue for BTreeMap<String, String> {
    fn write_to(&self, name: &str, params: &mut QueryParams) {
        for (i, (k, v)) in self.iter().enumerate() {
            params.insert(format!("{}[{}].key", name, i), k.clone());
            params.insert(format!("{}[{}].value", name, i), v.clone());
        }
    }
}

/// 生成 API 调用的参数结构体及其 [`ApiCommand`](crate::command::ApiCommand) 实现
///
/// ```ignore
/// api_params! {
///     /// 查询区域
///     ListZonesParams("listZones", Get, Plain) -> ListZonesResponse {
///         id: String => "id",
///         name: String => "name",
///     }
/// }
/// ```
macro_rules! api_params {
    ($(
        $(#[$meta:meta])*
        $name:ident ($command:literal, $method:ident, $shape:ident) -> $resp:ty {
            $( $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    )*) => {$(
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                $( $field: Option<$ty>, )*
            }

            impl $name {
                $(
                    #[doc = concat!("设置 `", $key, "` 参数")]
                    pub fn [<set_ $field>](&mut self, value: impl Into<$ty>) -> &mut Self {
                        self.$field = Some(value.into());
                        self
                    }

                    #[doc = concat!("读取 `", $key, "` 参数，未设置时返回 `None`")]
                    pub fn $field(&self) -> Option<&$ty> {
                        self.$field.as_ref()
                    }

                    #[doc = concat!("清除 `", $key, "` 参数")]
                    pub fn [<reset_ $field>](&mut self) -> &mut Self {
                        self.$field = None;
                        self
                    }
                )*
            }

            impl $crate::command::ApiCommand for $name {
                type Response = $resp;

                const COMMAND: &'static str = $command;
                const METHOD: $crate::command::HttpMethod = $crate::command::HttpMethod::$method;
                const SHAPE: $crate::command::ResponseShape = $crate::command::ResponseShape::$shape;

                fn to_query_params(&self) -> $crate::params::QueryParams {
                    #[allow(unused_mut)]
                    let mut params = $crate::params::QueryParams::new();
                    $(
                        if let Some(value) = &self.$field {
                            $crate::params::ParamValue::write_to(value, $key, &mut params);
                        }
                    )*
                    params
                }
            }
        }
    )*};
}

pub(crate) use api_params;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ApiCommand, HttpMethod, ResponseShape};

    api_params! {
        /// 测试用参数
        SampleParams("sampleCommand", Post, Wrapped) -> serde_json::Value {
            name: String => "name",
            enabled: bool => "enabled",
            size: i64 => "size",
            ids: Vec<String> => "ids",
            details: BTreeMap<String, String> => "details",
        }
    }

    #[test]
    fn test_set_get_reset() {
        let mut p = SampleParams::default();
        assert_eq!(p.name(), None);

        p.set_name("vm-01").set_size(20);
        assert_eq!(p.name().map(String::as_str), Some("vm-01"));
        assert_eq!(p.size(), Some(&20));

        p.reset_name();
        assert_eq!(p.name(), None);
        // 未设置的参数重置是空操作
        p.reset_enabled();
        assert_eq!(p.enabled(), None);
    }

    #[test]
    fn test_render_values() {
        let mut p = SampleParams::default();
        p.set_enabled(false)
            .set_size(1024)
            .set_ids(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        let q = p.to_query_params();
        assert_eq!(q.get("enabled"), Some("false"));
        assert_eq!(q.get("size"), Some("1024"));
        assert_eq!(q.get("ids"), Some("a,b,c"));
        assert!(!q.contains("name"));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_render_map_sorted() {
        let mut details = BTreeMap::new();
        details.insert("zeta".to_string(), "1".to_string());
        details.insert("alpha".to_string(), "2".to_string());

        let mut p = SampleParams::default();
        p.set_details(details);
        let q = p.to_query_params();

        assert_eq!(q.get("details[0].key"), Some("alpha"));
        assert_eq!(q.get("details[0].value"), Some("2"));
        assert_eq!(q.get("details[1].key"), Some("zeta"));
        assert_eq!(q.get("details[1].value"), Some("1"));
    }

    #[test]
    fn test_encode_deterministic() {
        let mut details = BTreeMap::new();
        details.insert("b".to_string(), "x y".to_string());
        details.insert("a".to_string(), "z".to_string());

        let mut p = SampleParams::default();
        p.set_name("my vm").set_details(details);

        let first = p.to_query_params().encode();
        let second = p.to_query_params().encode();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "details%5B0%5D.key=a&details%5B0%5D.value=z&details%5B1%5D.key=b&details%5B1%5D.value=x%20y&name=my%20vm"
        );
    }

    #[test]
    fn test_command_metadata() {
        assert_eq!(SampleParams::COMMAND, "sampleCommand");
        assert_eq!(SampleParams::METHOD, HttpMethod::Post);
        assert_eq!(SampleParams::SHAPE, ResponseShape::Wrapped);
    }

    #[test]
    fn test_query_params_extend_overrides() {
        let mut a: QueryParams = [("k", "1"), ("x", "2")].into_iter().collect();
        let b: QueryParams = [("k", "3")].into_iter().collect();
        a.extend(b);
        assert_eq!(a.get("k"), Some("3"));
        assert_eq!(a.get("x"), Some("2"));
    }
}
