use log::info;

use crate::config::AppConfig;
use crate::error::PageError;
use crate::table::{TableOptions, STRUCT_OR_LIST_TABLE};
use crate::trace::{TraceEntry, TraceTransformer, TransformReport};

/// 折叠面板显示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Shown,
    Hidden,
}

/// 页面上的折叠面板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: String,
    pub state: PanelState,
}

impl Panel {
    pub fn new(id: impl Into<String>, state: PanelState) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }
}

/// pre 块的 white-space 样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    #[default]
    Pre,
    PreWrap,
}

impl WhiteSpace {
    pub fn as_css(&self) -> &'static str {
        match self {
            WhiteSpace::Pre => "pre",
            WhiteSpace::PreWrap => "pre-wrap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreBlock {
    pub white_space: WhiteSpace,
}

pub fn collapse_all(panels: &mut [Panel]) {
    for panel in panels.iter_mut() {
        panel.state = PanelState::Hidden;
    }
}

pub fn expand_all(panels: &mut [Panel]) {
    for panel in panels.iter_mut() {
        panel.state = PanelState::Shown;
    }
}

/// 长行自动换行
pub fn wrap(blocks: &mut [PreBlock]) {
    set_white_space(blocks, WhiteSpace::PreWrap);
}

pub fn no_wrap(blocks: &mut [PreBlock]) {
    set_white_space(blocks, WhiteSpace::Pre);
}

fn set_white_space(blocks: &mut [PreBlock], mode: WhiteSpace) {
    for block in blocks.iter_mut() {
        block.white_space = mode;
    }
}

/// 页面就绪时的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyReport {
    pub table: Option<TableOptions>,
    pub traces: TransformReport,
}

/// 一个 introspect 页面上的元素集合
#[derive(Debug, Clone, Default)]
pub struct IntrospectPage {
    pub panels: Vec<Panel>,
    pub pre_blocks: Vec<PreBlock>,
    pub traces: Vec<TraceEntry>,
    /// 页面上表格元素的 id
    pub table_ids: Vec<String>,
    ready: bool,
}

impl IntrospectPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只有 id 为 struct-or-list-table 的表格才需要初始化
    pub fn has_table(&self) -> bool {
        self.table_ids.iter().any(|id| id == STRUCT_OR_LIST_TABLE)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// 页面构建完成后调用一次：初始化表格并转换 trace 时间戳
    pub fn on_ready(&mut self, config: &AppConfig) -> Result<ReadyReport, PageError> {
        if self.ready {
            return Err(PageError::AlreadyInitialized);
        }
        self.ready = true;

        let table = self
            .has_table()
            .then(|| TableOptions::from_config(&config.table));

        let transformer = TraceTransformer::from_config(&config.trace);
        let traces = transformer.transform_all(&mut self.traces);

        info!(
            "Page ready: table={}, traces={} ({} skipped)",
            table.is_some(),
            traces.transformed,
            traces.skipped.len()
        );

        Ok(ReadyReport { table, traces })
    }

    pub fn collapse_all(&mut self) {
        collapse_all(&mut self.panels);
    }

    pub fn expand_all(&mut self) {
        expand_all(&mut self.panels);
    }

    pub fn wrap(&mut self) {
        wrap(&mut self.pre_blocks);
    }

    pub fn no_wrap(&mut self) {
        no_wrap(&mut self.pre_blocks);
    }
}
