//! 按名称/ID 查询辅助
//!
//! 在列表调用之上按名称或 ID 取单条记录。名称查询是尽力而为的：
//! 服务器端的 `name` 过滤是模糊匹配，多条结果时只接受精确同名的那一条。

use tracing::error;
use uuid::Uuid;

use crate::api::project::ListProjectsParams;
use crate::api::zone::ListZonesParams;
use crate::client::CloudStackClient;
use crate::command::ApiCommand;
use crate::error::{CsError, Result};
use crate::params::QueryParams;

/// 可按名称和 ID 定位的资源
pub trait Resource {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// 列表调用的响应
pub trait Listing {
    type Item: Resource;

    /// 服务器返回的 `count`
    fn count(&self) -> i64;

    fn into_items(self) -> Vec<Self::Item>;
}

/// 列表查询的附加条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOption {
    /// 项目名称或 ID
    Project(String),
    /// 域 ID
    Domain(String),
    /// 区域名称或 ID
    Zone(String),
    /// 任意参数
    Param(String, String),
}

impl ListOption {
    pub fn project(project: impl Into<String>) -> Self {
        ListOption::Project(project.into())
    }

    pub fn domain(domain_id: impl Into<String>) -> Self {
        ListOption::Domain(domain_id.into())
    }

    pub fn zone(zone: impl Into<String>) -> Self {
        ListOption::Zone(zone.into())
    }

    pub fn param(key: impl Into<String>, value: impl Into<String>) -> Self {
        ListOption::Param(key.into(), value.into())
    }
}

/// 是否为 CloudStack 资源 ID（UUID）
pub fn is_id(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// 按名称选出唯一记录
pub fn pick_by_name<L: Listing>(kind: &'static str, name: &str, listing: L) -> Result<L::Item> {
    let count = listing.count();
    let mut items = listing.into_items();

    match items.len() {
        0 => Err(CsError::NotFound {
            kind,
            key: name.to_string(),
            count,
        }),
        1 => Ok(items.remove(0)),
        _ => items
            .into_iter()
            .find(|item| item.name() == name)
            .ok_or(CsError::Ambiguous {
                kind,
                key: name.to_string(),
                count,
            }),
    }
}

/// 按 ID 选出唯一记录
///
/// ID 应当唯一，多条结果视为服务器端数据异常。
pub fn pick_by_id<L: Listing>(kind: &'static str, id: &str, listing: L) -> Result<L::Item> {
    let count = listing.count();
    let mut items = listing.into_items();

    match items.len() {
        0 => Err(CsError::NotFound {
            kind,
            key: id.to_string(),
            count,
        }),
        1 => Ok(items.remove(0)),
        n => {
            error!("{} ID {} 对应 {} 条记录", kind, id, n);
            Err(CsError::IdNotUnique {
                kind,
                id: id.to_string(),
                count,
            })
        }
    }
}

/// 把“实体不存在”类的 API 错误转换为 [`CsError::NotFound`]
pub(crate) fn missing_entity(err: CsError, kind: &'static str, id: &str) -> CsError {
    let needle = format!(
        "Invalid parameter id value={} due to incorrect long value format, or entity does not exist",
        id
    );
    match &err {
        CsError::ApiError { text, .. } if text.contains(&needle) => {
            CsError::NotFound {
                kind,
                key: id.to_string(),
                count: 0,
            }
        }
        _ => err,
    }
}

impl CloudStackClient {
    /// 在附加条件下执行调用，通常用于列表调用
    pub async fn execute_in<C: ApiCommand>(
        &self,
        command: &C,
        options: &[ListOption],
    ) -> Result<C::Response> {
        let extra = self.resolve_options(options).await?;
        self.execute_with(command, extra).await
    }

    /// 把附加条件解析为请求参数，项目和区域名称会先解析为 ID
    pub(crate) async fn resolve_options(&self, options: &[ListOption]) -> Result<QueryParams> {
        let mut params = QueryParams::new();

        for option in options {
            match option {
                ListOption::Project(project) => {
                    let id = if is_id(project) {
                        project.clone()
                    } else {
                        let mut p = ListProjectsParams::new();
                        p.set_name(project.as_str()).set_list_all(true);
                        let listing = self.execute(&p).await?;
                        pick_by_name("project", project, listing)?.id
                    };
                    params.insert("projectid", id);
                }
                ListOption::Domain(domain_id) => params.insert("domainid", domain_id.clone()),
                ListOption::Zone(zone) => {
                    let id = if is_id(zone) {
                        zone.clone()
                    } else {
                        let mut p = ListZonesParams::new();
                        p.set_name(zone.as_str());
                        let listing = self.execute(&p).await?;
                        pick_by_name("zone", zone, listing)?.id
                    };
                    params.insert("zoneid", id);
                }
                ListOption::Param(key, value) => params.insert(key.clone(), value.clone()),
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: String,
        name: String,
    }

    impl Resource for Item {
        fn id(&self) -> &str {
            &self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    struct Items(Vec<Item>);

    impl Listing for Items {
        type Item = Item;
        fn count(&self) -> i64 {
            self.0.len() as i64
        }
        fn into_items(self) -> Vec<Item> {
            self.0
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_pick_by_name_none() {
        let err = pick_by_name("zone", "zone-a", Items(vec![])).unwrap_err();
        assert!(matches!(err, CsError::NotFound { kind: "zone", ref key, count: 0 } if key == "zone-a"));
    }

    #[test]
    fn test_pick_by_name_single() {
        let picked = pick_by_name("zone", "zone", Items(vec![item("1", "zone-a")])).unwrap();
        // 单条结果直接返回，不要求精确同名
        assert_eq!(picked.id, "1");
    }

    #[test]
    fn test_pick_by_name_exact_among_many() {
        let listing = Items(vec![item("1", "web-01"), item("2", "web"), item("3", "web-02")]);
        let picked = pick_by_name("domain", "web", listing).unwrap();
        assert_eq!(picked.id, "2");
    }

    #[test]
    fn test_pick_by_name_ambiguous() {
        let listing = Items(vec![item("1", "web-01"), item("2", "web-02")]);
        let err = pick_by_name("domain", "web", listing).unwrap_err();
        assert!(matches!(err, CsError::Ambiguous { count: 2, .. }));
    }

    #[test]
    fn test_pick_by_id() {
        let picked = pick_by_id("zone", "1", Items(vec![item("1", "a")])).unwrap();
        assert_eq!(picked.name, "a");

        let err = pick_by_id("zone", "1", Items(vec![])).unwrap_err();
        assert!(err.is_not_found());

        let err = pick_by_id("zone", "1", Items(vec![item("1", "a"), item("1", "b")])).unwrap_err();
        assert!(matches!(err, CsError::IdNotUnique { count: 2, .. }));
    }

    #[test]
    fn test_is_id() {
        assert!(is_id("9b2c1c7e-6a3e-4f5b-8a51-2f1d2b3c4d5e"));
        assert!(!is_id("zone-a"));
    }

    #[test]
    fn test_missing_entity() {
        let err = CsError::ApiError {
            code: 431,
            cs_code: 4350,
            text: "Invalid parameter id value=42 due to incorrect long value format, or entity does not exist or due to incorrect parameter annotation for the field in api cmd class.".to_string(),
        };
        assert!(missing_entity(err, "zone", "42").is_not_found());

        let err = CsError::HttpError("connection refused".to_string());
        assert!(matches!(missing_entity(err, "zone", "42"), CsError::HttpError(_)));
    }

    #[test]
    fn test_missing_entity_keeps_other_errors() {
        let err = CsError::ApiError {
            code: 431,
            cs_code: 4350,
            text: "Unable to find template: network offering does not exist".to_string(),
        };
        assert!(matches!(
            missing_entity(err, "zone", "42"),
            CsError::ApiError { code: 431, .. }
        ));

        // 其他 ID 的“不存在”错误不算作当前实体缺失
        let err = CsError::ApiError {
            code: 431,
            cs_code: 4350,
            text: "Invalid parameter id value=43 due to incorrect long value format, or entity does not exist".to_string(),
        };
        assert!(!missing_entity(err, "zone", "42").is_not_found());
    }
}
