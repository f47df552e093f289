//! 日期工具函数
//!
//! 列表过滤的 `dateFrom`/`dateTo` 以 `YYYY-MM-DD` 传入，按 UTC 整天解释。

use chrono::NaiveDate;

use super::{AppError, AppResult};

const DAY_MILLIS: i64 = 86_400_000;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 日期开始 (00:00:00 UTC) → Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    shared::util::date_to_millis(date)
}

/// 日期结束 → 次日 00:00:00 的 Unix millis
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate) -> i64 {
    day_start_millis(date) + DAY_MILLIS
}

/// Optional `dateFrom`/`dateTo` pair → half-open millis range
pub fn date_range(from: Option<&str>, to: Option<&str>) -> AppResult<(Option<i64>, Option<i64>)> {
    let start = from.map(parse_date).transpose()?.map(day_start_millis);
    let end = to.map(parse_date).transpose()?.map(day_end_millis);
    Ok((start, end))
}
