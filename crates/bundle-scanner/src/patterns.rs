//! 从支持包文件名中提取嵌入的时间戳与 SR 号。
//!
//! 未匹配不算错误，只返回 None。

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// 8 位日期 + `T` + 9 位时间（时分秒 + 3 位毫秒），两侧不能紧挨数字
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^0-9])([0-9]{8}T[0-9]{9})(?:[^0-9]|$)").expect("timestamp pattern")
});

/// `3-` + 恰好 11 位数字，其后为非数字或结尾
static SERVICE_REQUEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(3-[0-9]{11})(?:[^0-9]|$)").expect("service request pattern"));

/// 解析 `YYYYMMDDTHHMMSSfff`；只取第一个匹配，日期非法时返回 None
pub fn parse_for_timestamp(name: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP_RE.captures(name)?;
    let digits = caps.get(1)?.as_str();
    let field = |range: std::ops::Range<usize>| digits.get(range)?.parse::<u32>().ok();

    let year = digits.get(0..4)?.parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?;
    // digits[8] 是分隔符 T
    date.and_hms_milli_opt(field(9..11)?, field(11..13)?, field(13..15)?, field(15..18)?)
}

pub fn parse_for_service_request_id(name: &str) -> Option<String> {
    SERVICE_REQUEST_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
