use super::rendered::RenderedChart;
use crate::types::inputs::SectionType;
use serde::{Deserialize, Serialize};

/// 小节版式模板（展示层按变体选择组件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SectionLayout {
    Narrative {
        text: String,
        chart: Option<RenderedChart>,
    },
    CaseStudy {
        heading: String,
        text: String,
        chart: Option<RenderedChart>,
    },
    HistoricalReview {
        banner: String,
        asset: Option<String>,
        date: Option<String>,
        text: String,
    },
    TipCallout {
        heading: String,
        items: Vec<String>,
    },
    SignalList {
        items: Vec<String>,
        sell: bool,
    },
    ProcessTimeline {
        steps: Vec<String>,
    },
    DisciplineWarning {
        items: Vec<String>,
    },
}

impl SectionLayout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Narrative { .. } => "narrative",
            Self::CaseStudy { .. } => "case_study",
            Self::HistoricalReview { .. } => "historical_review",
            Self::TipCallout { .. } => "tip_callout",
            Self::SignalList { .. } => "signal_list",
            Self::ProcessTimeline { .. } => "process_timeline",
            Self::DisciplineWarning { .. } => "discipline_warning",
        }
    }

    pub fn chart(&self) -> Option<&RenderedChart> {
        match self {
            Self::Narrative { chart, .. } | Self::CaseStudy { chart, .. } => chart.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    pub title: String,
    pub section_type: SectionType,
    /// 纪律类小节标题前显示警示标记
    pub warning_marker: bool,
    pub layout: SectionLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub module_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterView {
    pub index: usize,
    pub module_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub completed: bool,
    pub sections: Vec<SectionView>,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
    /// 最后一章且已完成
    pub course_finished: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "chapter", rename_all = "snake_case")]
pub enum ChapterState {
    Loading,
    Ready(Box<ChapterView>),
}

impl ChapterState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn chapter(&self) -> Option<&ChapterView> {
        match self {
            Self::Loading => None,
            Self::Ready(view) => Some(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub module_id: String,
    pub title: String,
    pub active: bool,
    pub completed: bool,
}

/// 侧边栏：章节列表与整体进度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarView {
    pub entries: Vec<SidebarEntry>,
    pub completed_count: usize,
    pub total: usize,
    pub progress_percent: u32,
}
