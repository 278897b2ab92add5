use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// introspect 页面辅助工具的配置，每一节都有默认值，加载时校验
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub trace: TraceConfig,
    pub table: TableConfig,
    pub request: RequestConfig,
}

/// Trace 时间戳显示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub timezone: DisplayZone,
    pub malformed: MalformedPolicy,
    pub placeholder: String,
}

/// 表格控件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub dom: String,
    pub pagination_type: String,
    pub length_menu: String,
    pub sort_enabled: bool,
    pub search_enabled: bool,
}

/// 请求链接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub host: String,
    pub port: u16,
}

/// trace 时间戳的显示时区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

/// 时间戳无效时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Leave,
    Placeholder,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            timezone: DisplayZone::Local,
            malformed: MalformedPolicy::Leave,
            placeholder: "????-??-?? ??:??:??.???".to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            dom: "<'row-fluid'<'pull-left'l><'pull-left dt-margin-10'f>r>t<'row-fluid'<'pull-left'p><'pull-left dt-margin-10'i>>".to_string(),
            pagination_type: "bootstrap".to_string(),
            length_menu: "_MENU_ Records per Page".to_string(),
            sort_enabled: true,
            search_enabled: true,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8085,
        }
    }
}

impl FromStr for DisplayZone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(DisplayZone::Local),
            "utc" | "z" => Ok(DisplayZone::Utc),
            other => FixedOffset::from_str(other)
                .map(DisplayZone::Fixed)
                .map_err(|e| ConfigError::ValidationError(format!("Invalid timezone {:?}: {}", s, e))),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Utc => write!(f, "utc"),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl TryFrom<String> for DisplayZone {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayZone> for String {
    fn from(zone: DisplayZone) -> Self {
        zone.to_string()
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(ConfigError::SerializeError)?;

        std::fs::write(path, content)
            .map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trace.malformed == MalformedPolicy::Placeholder && self.trace.placeholder.is_empty() {
            return Err(ConfigError::ValidationError("Placeholder must not be empty when the placeholder policy is used".to_string()));
        }

        if self.table.pagination_type.trim().is_empty() {
            return Err(ConfigError::ValidationError("Pagination type must not be empty".to_string()));
        }

        if self.request.host.trim().is_empty() {
            return Err(ConfigError::ValidationError("Request host must not be empty".to_string()));
        }

        if self.request.port == 0 {
            return Err(ConfigError::ValidationError("Request port must be positive".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_path: None,
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            config_path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取可变配置
    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// 保存配置
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.config_path {
            self.config.save_to_file(path)?;
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
