//! 分页类型
//!
//! 所有列表接口共用的分页参数与分页响应。

use serde::{Deserialize, Serialize};

/// Upper bound for `limit`
pub const MAX_LIMIT: u32 = 100;

/// Pagination query parameters (`?page=2&limit=10`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageParams {
    /// 页码 (从 1 开始)
    pub page: Option<u32>,
    /// 每页数量
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Resolve to a concrete `(page, limit)`
    ///
    /// `page` is at least 1; `limit` falls back to the endpoint default and is
    /// clamped to `[1, MAX_LIMIT]`.
    pub fn resolve(&self, default_limit: u32) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT);
        (page, limit)
    }
}

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 数据列表
    pub list: Vec<T>,
    /// 过滤后、分页前的总记录数
    pub total: u64,
    /// 当前页码
    pub page: u32,
    /// 每页数量
    pub limit: u32,
    /// 总页数
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(limit as u64) as u32
        } else {
            0
        };

        Self {
            list,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            list: self.list.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_and_clamps() {
        assert_eq!(PageParams::default().resolve(10), (1, 10));
        assert_eq!(PageParams::new(0, 0).resolve(10), (1, 1));
        assert_eq!(PageParams::new(3, 500).resolve(20), (3, MAX_LIMIT));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Page::<u8>::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], 10, 1, 10).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], 11, 1, 10).total_pages, 2);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let json = serde_json::to_string(&Page::new(vec![1], 1, 1, 10)).unwrap();
        assert_eq!(json, r#"{"list":[1],"total":1,"page":1,"limit":10,"totalPages":1}"#);
    }
}
