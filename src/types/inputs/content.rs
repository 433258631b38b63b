use serde::{Deserialize, Serialize};

/// 小节的版式类型（JSON 中为 kebab-case）
///
/// 无法识别的类型落到 General，按概念讲解版式展示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Concept,
    CaseStudy,
    RealWorld,
    Tips,
    List,
    Process,
    Discipline,
    #[serde(other)]
    General,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::CaseStudy => "case-study",
            Self::RealWorld => "real-world",
            Self::Tips => "tips",
            Self::List => "list",
            Self::Process => "process",
            Self::Discipline => "discipline",
            Self::General => "general",
        }
    }

    /// 只有概念讲解（含未知类型）和案例推演会嵌入图表
    pub fn embeds_chart(&self) -> bool {
        matches!(self, Self::Concept | Self::CaseStudy | Self::General)
    }
}

/// 小节正文：一段文字或条目列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
}

impl SectionBody {
    /// 按文字版式读取，列表以换行拼接
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Items(items) => items.join("\n"),
        }
    }

    /// 按列表版式读取，文字按行拆分并丢弃空行
    pub fn as_items(&self) -> Vec<String> {
        match self {
            Self::Text(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Items(items) => items.clone(),
        }
    }
}

impl Default for SectionBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// 课程中的一个小节
///
/// chart_type / chart_scenario 保留原始字符串，解析与降级在分发阶段完成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub content: SectionBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_scenario: Option<String>,
}

/// 一个章节（模块）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
}
