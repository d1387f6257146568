/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's calendar date in the server's local timezone.
///
/// Callers pass this explicitly as a cancellation `evaluationDate`; the
/// calculators themselves never read the clock.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
