use crate::types::inputs::{IndicatorKind, Scenario};
use serde::{Deserialize, Serialize};

/// 图表族：决定整体绘制方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartFamily {
    Line,
    AreaLine,
    BarLine,
    ScatterLine,
    SteppedDualLine,
    Placeholder,
}

impl ChartFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::AreaLine => "area_line",
            Self::BarLine => "bar_line",
            Self::ScatterLine => "scatter_line",
            Self::SteppedDualLine => "stepped_dual_line",
            Self::Placeholder => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    Monotone,
    Step,
}

/// 单条序列的视觉样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesStyle {
    Line { curve: Curve },
    Area { fill_opacity: f64 },
    Bar { width: f64 },
    Scatter { radius: f64 },
}

impl SeriesStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line { curve: Curve::Monotone } => "line",
            Self::Line { curve: Curve::Step } => "step",
            Self::Area { .. } => "area",
            Self::Bar { .. } => "bar",
            Self::Scatter { .. } => "scatter",
        }
    }
}

/// 逐点着色规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorRule {
    /// 使用序列自身颜色
    Fixed,
    /// 按数值正负着色（> 0 为 positive）
    SignOf { positive: String, negative: String },
    /// 按同一行的布尔字段着色
    Flag {
        field: String,
        on: String,
        off: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisId {
    Left,
    Right,
}

impl AxisId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AxisDomain {
    Auto,
    /// 自动上界、下界锚定在 0（柱状量能轴）
    ZeroBased,
    Fixed { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: AxisId,
    pub domain: AxisDomain,
}

impl AxisSpec {
    pub fn auto(id: AxisId) -> Self {
        Self {
            id,
            domain: AxisDomain::Auto,
        }
    }

    pub fn zero_based(id: AxisId) -> Self {
        Self {
            id,
            domain: AxisDomain::ZeroBased,
        }
    }

    pub fn fixed(id: AxisId, min: f64, max: f64) -> Self {
        Self {
            id,
            domain: AxisDomain::Fixed { min, max },
        }
    }
}

/// 一条要绘制的序列：字段 → 视觉元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub field: String,
    pub label: String,
    pub style: SeriesStyle,
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub axis: AxisId,
    pub color_rule: ColorRule,
}

impl SeriesSpec {
    /// 平滑折线（默认左轴、不透明、固定颜色）
    pub fn line(field: &str, label: &str, color: &str, stroke_width: f64) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            style: SeriesStyle::Line {
                curve: Curve::Monotone,
            },
            color: color.to_string(),
            stroke_width,
            opacity: 1.0,
            axis: AxisId::Left,
            color_rule: ColorRule::Fixed,
        }
    }

    pub fn step(field: &str, label: &str, color: &str, stroke_width: f64) -> Self {
        Self {
            style: SeriesStyle::Line { curve: Curve::Step },
            ..Self::line(field, label, color, stroke_width)
        }
    }

    pub fn area(field: &str, label: &str, color: &str, fill_opacity: f64) -> Self {
        Self {
            style: SeriesStyle::Area { fill_opacity },
            stroke_width: 0.0,
            ..Self::line(field, label, color, 0.0)
        }
    }

    pub fn bar(field: &str, label: &str, color: &str, width: f64) -> Self {
        Self {
            style: SeriesStyle::Bar { width },
            stroke_width: 0.0,
            ..Self::line(field, label, color, 0.0)
        }
    }

    pub fn scatter(field: &str, label: &str, color: &str, radius: f64) -> Self {
        Self {
            style: SeriesStyle::Scatter { radius },
            stroke_width: 0.0,
            ..Self::line(field, label, color, 0.0)
        }
    }

    pub fn on_axis(mut self, axis: AxisId) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_color_rule(mut self, rule: ColorRule) -> Self {
        self.color_rule = rule;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinePosition {
    /// 水平线，y 为数值
    Horizontal { y: f64 },
    /// 竖直标记线，t 为样本序号
    Vertical { t: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub position: LinePosition,
    pub label: Option<String>,
    pub color: String,
    pub dashed: bool,
    pub axis: AxisId,
}

impl ReferenceLine {
    pub fn horizontal(y: f64, color: &str) -> Self {
        Self {
            position: LinePosition::Horizontal { y },
            label: None,
            color: color.to_string(),
            dashed: true,
            axis: AxisId::Left,
        }
    }

    pub fn vertical(t: i64, color: &str, label: &str) -> Self {
        Self {
            position: LinePosition::Vertical { t },
            label: Some(label.to_string()),
            color: color.to_string(),
            dashed: false,
            axis: AxisId::Left,
        }
    }
}

/// 仅在指定场景下出现的参考线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalAnnotation {
    pub scenarios: Vec<Scenario>,
    pub line: ReferenceLine,
}

impl ConditionalAnnotation {
    pub fn new(scenarios: &[Scenario], line: ReferenceLine) -> Self {
        Self {
            scenarios: scenarios.to_vec(),
            line,
        }
    }

    pub fn applies_to(&self, scenario: Scenario) -> bool {
        self.scenarios.contains(&scenario)
    }
}

/// 指标的静态绘图方案
///
/// kind 为 None 且 placeholder 有值时表示占位方案，只绘制居中提示文字。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlan {
    pub kind: Option<IndicatorKind>,
    pub family: ChartFamily,
    pub series: Vec<SeriesSpec>,
    pub axes: Vec<AxisSpec>,
    pub dual_axis: bool,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<ConditionalAnnotation>,
    pub placeholder: Option<String>,
}

impl ChartPlan {
    pub fn placeholder(message: &str) -> Self {
        Self {
            kind: None,
            family: ChartFamily::Placeholder,
            series: Vec::new(),
            axes: Vec::new(),
            dual_axis: false,
            reference_lines: Vec::new(),
            annotations: Vec::new(),
            placeholder: Some(message.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn axis(&self, id: AxisId) -> Option<&AxisSpec> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    pub fn series_on(&self, id: AxisId) -> impl Iterator<Item = &SeriesSpec> {
        self.series.iter().filter(move |series| series.axis == id)
    }

    /// 常驻参考线 + 命中当前场景的条件标注
    pub fn lines_for(&self, scenario: Scenario) -> Vec<&ReferenceLine> {
        self.reference_lines
            .iter()
            .chain(
                self.annotations
                    .iter()
                    .filter(|annotation| annotation.applies_to(scenario))
                    .map(|annotation| &annotation.line),
            )
            .collect()
    }

    /// 序列引用到的全部字段（含着色规则依赖的布尔字段）
    pub fn required_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for series in &self.series {
            if !fields.contains(&series.field.as_str()) {
                fields.push(series.field.as_str());
            }
            if let ColorRule::Flag { field, .. } = &series.color_rule {
                if !fields.contains(&field.as_str()) {
                    fields.push(field.as_str());
                }
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_for_filters_annotations_by_scenario() {
        let plan = ChartPlan {
            kind: Some(IndicatorKind::Macd),
            family: ChartFamily::BarLine,
            series: vec![SeriesSpec::line("macd", "DIF", "#facc15", 2.0)],
            axes: vec![AxisSpec::auto(AxisId::Left)],
            dual_axis: false,
            reference_lines: vec![ReferenceLine::horizontal(0.0, "#6b7280")],
            annotations: vec![ConditionalAnnotation::new(
                &[Scenario::AirRefuel],
                ReferenceLine::vertical(35, "yellow", "空中加油"),
            )],
            placeholder: None,
        };
        assert_eq!(plan.lines_for(Scenario::Bullish).len(), 1);
        assert_eq!(plan.lines_for(Scenario::AirRefuel).len(), 2);
    }

    #[test]
    fn test_required_fields_include_flag_columns() {
        let plan = ChartPlan {
            series: vec![SeriesSpec::bar("vol", "成交量", "#22c55e", 4.0).with_color_rule(
                ColorRule::Flag {
                    field: "is_up".into(),
                    on: "#22c55e".into(),
                    off: "#ef4444".into(),
                },
            )],
            ..ChartPlan::placeholder("x")
        };
        assert_eq!(plan.required_fields(), vec!["vol", "is_up"]);
    }
}
