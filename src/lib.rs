pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod page;
pub mod request;
pub mod table;
pub mod trace;
pub mod utils;

pub use config::{AppConfig, ConfigError, ConfigManager, DisplayZone, MalformedPolicy, TraceConfig};
pub use error::{PageError, TraceError};
pub use page::{IntrospectPage, Panel, PanelState, PreBlock, ReadyReport, WhiteSpace};
pub use request::{encode_uri_component, SandeshRequest};
pub use table::TableOptions;
pub use trace::{transform_trace_msgs, TraceElement, TraceEntry, TraceTimestamp, TraceTransformer, TransformReport};
pub use utils::{format_date_time, format_datetime_tz, pad_zero, DateTimeParts};
