use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::RequestConfig;

/// 与 encodeURIComponent 一致的保留字符集
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const REQUEST_PREFIX: &str = "Snh_";

/// 对请求参数进行编码
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// introspect 链接请求：Snh_<link>?x=<value>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandeshRequest {
    pub link: String,
    pub value: String,
}

impl SandeshRequest {
    pub fn new(link: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            value: value.into(),
        }
    }

    /// 分批响应中 next_batch 对应的下一页请求，link 和文本都不能为空
    pub fn next_batch(link: Option<&str>, text: Option<&str>) -> Option<Self> {
        match (link, text) {
            (Some(link), Some(text)) if !link.is_empty() && !text.is_empty() => {
                Some(Self::new(link, text))
            }
            _ => None,
        }
    }

    /// 页面跳转的相对地址
    pub fn to_url(&self) -> String {
        format!(
            "{}{}?x={}",
            REQUEST_PREFIX,
            self.link,
            encode_uri_component(&self.value)
        )
    }

    /// 拼接完整的请求地址
    pub fn with_base(&self, config: &RequestConfig) -> String {
        format!("http://{}:{}/{}", config.host, config.port, self.to_url())
    }
}
