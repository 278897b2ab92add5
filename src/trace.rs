use chrono::{DateTime, Local, TimeZone, Utc};
use log::{debug, warn};

use crate::config::{DisplayZone, MalformedPolicy, TraceConfig};
use crate::error::TraceError;
use crate::utils::format_datetime_tz;

/// trace 消息开头的 UTC 时间戳，单位为微秒
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TraceTimestamp(i64);

impl TraceTimestamp {
    pub fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// 解析消息开头的时间戳，非整数即为 MalformedTimestamp
    pub fn parse(token: &str) -> Result<Self, TraceError> {
        token
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TraceError::MalformedTimestamp {
                token: token.to_string(),
            })
    }

    pub fn as_micros(&self) -> i64 {
        self.0
    }

    /// 毫秒部分向零截断
    pub fn as_millis(&self) -> i64 {
        self.0 / 1000
    }

    pub fn to_utc(&self) -> Result<DateTime<Utc>, TraceError> {
        Utc.timestamp_millis_opt(self.as_millis())
            .single()
            .ok_or(TraceError::TimestampOutOfRange { micros: self.0 })
    }

    /// 转换到指定时区后格式化为 yyyy-mm-dd hh:mm:ss.sss
    pub fn format_in(&self, zone: &DisplayZone) -> Result<String, TraceError> {
        let utc = self.to_utc()?;
        let formatted = match zone {
            DisplayZone::Local => format_datetime_tz(&utc.with_timezone(&Local)),
            DisplayZone::Utc => format_datetime_tz(&utc),
            DisplayZone::Fixed(offset) => format_datetime_tz(&utc.with_timezone(offset)),
        };
        Ok(formatted)
    }
}

/// 页面上以 trace 时间戳开头的元素
pub trait TraceElement {
    fn content(&self) -> &str;
    fn set_content(&mut self, content: String);
}

/// 一条 trace 消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    content: String,
}

impl TraceEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl TraceElement for TraceEntry {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

impl TraceElement for String {
    fn content(&self) -> &str {
        self
    }

    fn set_content(&mut self, content: String) {
        *self = content;
    }
}

/// 按第一个空格切分出时间戳，剩余部分保留分隔空格
///
/// 只有 ASCII 空格算分隔符，制表符等其他空白属于时间戳本身
pub fn split_leading_token(content: &str) -> (&str, &str) {
    match content.find(' ') {
        Some(pos) => content.split_at(pos),
        None => (content, ""),
    }
}

/// 无法转换的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub error: TraceError,
}

/// 一次转换的统计结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub transformed: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl TransformReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn total(&self) -> usize {
        self.transformed + self.skipped.len()
    }
}

/// 将 trace 消息中的 UTC 时间戳转换为本地时间
#[derive(Debug, Clone)]
pub struct TraceTransformer {
    zone: DisplayZone,
    policy: MalformedPolicy,
    placeholder: String,
}

impl TraceTransformer {
    pub fn new(zone: DisplayZone) -> Self {
        Self::from_config(&TraceConfig {
            timezone: zone,
            ..TraceConfig::default()
        })
    }

    pub fn from_config(config: &TraceConfig) -> Self {
        Self {
            zone: config.timezone,
            policy: config.malformed,
            placeholder: config.placeholder.clone(),
        }
    }

    /// 转换单行，开头的时间戳替换为格式化后的本地时间
    pub fn transform_line(&self, content: &str) -> Result<String, TraceError> {
        let (token, rest) = split_leading_token(content);
        let ts = TraceTimestamp::parse(token)?.format_in(&self.zone)?;
        Ok(format!("{}{}", ts, rest))
    }

    /// 按顺序转换所有元素。
    /// 不能重复调用：第二次看到的是已格式化的日期，全部会被当作无效时间戳
    pub fn transform_all<E: TraceElement>(&self, elements: &mut [E]) -> TransformReport {
        let mut report = TransformReport::default();

        if elements.is_empty() {
            debug!("No trace messages to transform");
            return report;
        }

        for (index, element) in elements.iter_mut().enumerate() {
            match self.transform_line(element.content()) {
                Ok(converted) => {
                    element.set_content(converted);
                    report.transformed += 1;
                }
                Err(error) => {
                    warn!("Trace message {} has no valid timestamp: {}", index, error);
                    if self.policy == MalformedPolicy::Placeholder {
                        let (_, rest) = split_leading_token(element.content());
                        let replaced = format!("{}{}", self.placeholder, rest);
                        element.set_content(replaced);
                    }
                    report.skipped.push(SkippedEntry { index, error });
                }
            }
        }

        debug!(
            "Transformed {} trace messages ({} skipped)",
            report.transformed,
            report.skipped.len()
        );
        report
    }
}

impl Default for TraceTransformer {
    fn default() -> Self {
        Self::from_config(&TraceConfig::default())
    }
}

/// 使用默认配置把 trace 时间戳转换为本地时间
pub fn transform_trace_msgs<E: TraceElement>(elements: &mut [E]) -> TransformReport {
    TraceTransformer::default().transform_all(elements)
}
