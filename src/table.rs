use serde::Serialize;

use crate::config::TableConfig;

/// 页面就绪时需要初始化的表格 id
pub const STRUCT_OR_LIST_TABLE: &str = "struct-or-list-table";

/// 表格控件的语言选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLanguage {
    #[serde(rename = "sLengthMenu")]
    pub length_menu: String,
}

/// 传给表格控件的选项，字段名与控件一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOptions {
    #[serde(rename = "sDom")]
    pub dom: String,
    #[serde(rename = "sPaginationType")]
    pub pagination_type: String,
    #[serde(rename = "oLanguage")]
    pub language: TableLanguage,
    #[serde(rename = "bSort")]
    pub sort: bool,
    #[serde(rename = "bFilter")]
    pub filter: bool,
}

impl TableOptions {
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            dom: config.dom.clone(),
            pagination_type: config.pagination_type.clone(),
            language: TableLanguage {
                length_menu: config.length_menu.clone(),
            },
            sort: config.sort_enabled,
            filter: config.search_enabled,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}
