/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque resource ID of the form `<prefix>-<uuid>`.
///
/// The prefix only helps humans reading logs; callers must treat the whole
/// string as opaque.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Convert a `YYYY-MM-DD` date at 00:00 UTC to Unix millis.
pub fn date_to_millis(date: chrono::NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()
}
