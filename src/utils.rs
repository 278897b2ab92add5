use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// 在字符串前补0，直到达到指定宽度
pub fn pad_zero(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let mut padded = "0".repeat(width - len);
    padded.push_str(s);
    padded
}

/// 本地日期时间的各个字段，month0 从 0 开始（0 = 一月）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeParts {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl DateTimeParts {
    pub fn new(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month0,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for DateTimeParts {
    fn from(dt: &DateTime<Tz>) -> Self {
        // 闰秒时 chrono 的纳秒会超过 999_999_999，毫秒截断到 999
        let millisecond = (dt.timestamp_subsec_millis()).min(999);
        Self {
            year: dt.year(),
            month0: dt.month0(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            millisecond,
        }
    }
}

/// 格式化为 yyyy-mm-dd hh:mm:ss.sss
pub fn format_date_time(parts: &DateTimeParts) -> String {
    // 负数年份：符号放在补零之前，如 -0001
    let digits = pad_zero(&parts.year.unsigned_abs().to_string(), 4);
    let yyyy = if parts.year < 0 { format!("-{}", digits) } else { digits };
    // month0 是 0 - 11，输出时加 1
    let mm = pad_zero(&parts.month0.saturating_add(1).to_string(), 2);
    let dd = pad_zero(&parts.day.to_string(), 2);

    let hh = pad_zero(&parts.hour.to_string(), 2);
    let min = pad_zero(&parts.minute.to_string(), 2);
    let ss = pad_zero(&parts.second.to_string(), 2);
    let sss = pad_zero(&parts.millisecond.to_string(), 3);

    format!("{}-{}-{} {}:{}:{}.{}", yyyy, mm, dd, hh, min, ss, sss)
}

/// 按 DateTime 自带的时区格式化
pub fn format_datetime_tz<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format_date_time(&DateTimeParts::from(dt))
}
