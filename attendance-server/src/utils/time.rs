//! 时间工具函数 (业务日期)
//!
//! 出勤记录以业务时区的日历日期 (YYYY-MM-DD) 为键。
//! 业务时区是固定 UTC 偏移 (默认 UTC+9)。

use chrono::{FixedOffset, NaiveDate, Utc};

use super::{AppError, AppResult};

/// 日期键格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| AppError::invalid_date(date))
}

/// 校验并规范化日期键 (例如 "2024-1-5" → "2024-01-05")
pub fn normalize_date(date: &str) -> AppResult<String> {
    parse_date(date).map(format_date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 业务时区的今天
pub fn business_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// 业务时区的今天 (日期键)
pub fn business_today_key(offset: FixedOffset) -> String {
    format_date(business_today(offset))
}
