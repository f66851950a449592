//! 订单日期归一化
//!
//! 上游数据中同时存在 `dd/mm/yyyy` 与 ISO-8601 两种日期格式。
//! 这里把二者统一为本地时间的 `NaiveDateTime`, 解析失败时返回
//! [`OrderDate::Invalid`] 而不是报错, 由调用方决定如何处理。

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

static DMY_REGEX: OnceLock<Regex> = OnceLock::new();

fn dmy_regex() -> &'static Regex {
    DMY_REGEX.get_or_init(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"))
}

/// 归一化后的订单日期
///
/// `Invalid` 排在所有有效日期之前, 与空字符串的排序行为一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderDate {
    Invalid,
    At(NaiveDateTime),
}

impl OrderDate {
    pub fn instant(self) -> Option<NaiveDateTime> {
        match self {
            OrderDate::Invalid => None,
            OrderDate::At(at) => Some(at),
        }
    }
}

/// 是否为 `dd/mm/yyyy`
pub fn is_display_format(raw: &str) -> bool {
    dmy_regex().is_match(raw)
}

/// 解析订单日期字符串
pub fn parse_order_date(raw: &str) -> OrderDate {
    let parsed = if is_display_format(raw) {
        parse_positional(raw)
    } else {
        parse_iso(raw.trim())
    };

    parsed.map_or(OrderDate::Invalid, OrderDate::At)
}

/// 统一输出为 `dd/mm/yyyy`; 无法解析时原样返回
pub fn format_order_date(raw: &str) -> String {
    if is_display_format(raw) {
        return raw.to_string();
    }

    match parse_order_date(raw) {
        OrderDate::At(at) => at.format("%d/%m/%Y").to_string(),
        OrderDate::Invalid => raw.to_string(),
    }
}

/// 筛选条件中的日期: 接受 `yyyy-mm-dd` 或 `dd/mm/yyyy`
pub fn parse_filter_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_order_date(trimmed).instant().map(|at| at.date()))
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 当天 23:59:59.999
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::milliseconds(86_399_999)
}

/// 按位置解析 日/月/年, 越界的日或月顺延到相邻月份 (31/02 -> 02/03)
fn parse_positional(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split('/').map(|p| p.parse::<i64>().ok());
    let day = parts.next()??;
    let month = parts.next()??;
    let year = parts.next()??;

    let months = year * 12 + (month - 1);
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    let date = first.checked_add_signed(Duration::days(day - 1))?;

    Some(start_of_day(date))
}

fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
