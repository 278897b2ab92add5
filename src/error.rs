/// Trace 消息时间戳转换错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Malformed timestamp: {token:?}")]
    MalformedTimestamp { token: String },
    #[error("Timestamp out of range: {micros} us")]
    TimestampOutOfRange { micros: i64 },
}

/// 页面初始化错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Page already initialized")]
    AlreadyInitialized,
}
