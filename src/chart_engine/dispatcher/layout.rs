use crate::chart_engine::plan::resolve_scenario;
use crate::chart_engine::renderer::render_unsupported;
use crate::chart_engine::top_level_api::build_chart;
use crate::error::ViewerError;
use crate::types::{
    GenerateConfig, IndicatorKind, RenderConfig, RenderedChart, SectionContent, SectionLayout,
    SectionType, SectionView,
};
use tracing::warn;

pub const CASE_STUDY_HEADING: &str = "理论推演";
pub const HISTORICAL_BANNER: &str = "Historical Data Review";
pub const TIPS_HEADING: &str = "交易员笔记";
const SELL_KEYWORDS: [&str; 2] = ["卖出", "做空"];

/// 列表标题含卖出/做空字样时按卖出信号样式展示
pub fn is_sell_list(title: &str) -> bool {
    SELL_KEYWORDS.iter().any(|keyword| title.contains(keyword))
}

/// 小节内嵌图表：指标无法识别时渲染占位图
fn section_chart(
    section: &SectionContent,
    generate: &GenerateConfig,
    render: &RenderConfig,
) -> Result<Option<RenderedChart>, ViewerError> {
    let Some(raw_kind) = section.chart_type.as_deref() else {
        return Ok(None);
    };
    let scenario = resolve_scenario(section.chart_scenario.as_deref());
    let rendered = match raw_kind.parse::<IndicatorKind>() {
        Ok(kind) => build_chart(kind, scenario, generate, render)?,
        Err(e) => {
            warn!(section = %section.title, error = %e, "unsupported chart type in section");
            render_unsupported(raw_kind, scenario, render)?
        }
    };
    Ok(Some(rendered))
}

/// 按小节类型选择版式并完成正文形态转换
pub fn render_section(
    section: &SectionContent,
    generate: &GenerateConfig,
    render: &RenderConfig,
) -> Result<SectionView, ViewerError> {
    let chart = if section.section_type.embeds_chart() {
        section_chart(section, generate, render)?
    } else {
        None
    };

    let body = &section.content;
    let layout = match section.section_type {
        SectionType::Concept | SectionType::General => SectionLayout::Narrative {
            text: body.as_text(),
            chart,
        },
        SectionType::CaseStudy => SectionLayout::CaseStudy {
            heading: CASE_STUDY_HEADING.to_string(),
            text: body.as_text(),
            chart,
        },
        SectionType::RealWorld => SectionLayout::HistoricalReview {
            banner: HISTORICAL_BANNER.to_string(),
            asset: section.asset.clone(),
            date: section.date.clone(),
            text: body.as_text(),
        },
        SectionType::Tips => SectionLayout::TipCallout {
            heading: TIPS_HEADING.to_string(),
            items: body.as_items(),
        },
        SectionType::List => SectionLayout::SignalList {
            items: body.as_items(),
            sell: is_sell_list(&section.title),
        },
        SectionType::Process => SectionLayout::ProcessTimeline {
            steps: body.as_items(),
        },
        SectionType::Discipline => SectionLayout::DisciplineWarning {
            items: body.as_items(),
        },
    };

    Ok(SectionView {
        title: section.title.clone(),
        section_type: section.section_type,
        warning_marker: section.section_type == SectionType::Discipline,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_engine::plan::PLACEHOLDER_MESSAGE;
    use crate::chart_engine::utils::test_helpers::TEST_SEED;
    use crate::types::{ScenarioCategory, SectionBody};

    fn section(section_type: SectionType, title: &str, content: SectionBody) -> SectionContent {
        SectionContent {
            title: title.to_string(),
            section_type,
            content,
            asset: None,
            date: None,
            chart_type: None,
            chart_scenario: None,
        }
    }

    fn dispatch(section: &SectionContent) -> SectionView {
        render_section(
            section,
            &GenerateConfig::seeded(TEST_SEED),
            &RenderConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_concept_embeds_chart() {
        let mut concept = section(
            SectionType::Concept,
            "金叉",
            SectionBody::Text("短期均线上穿长期均线".into()),
        );
        concept.chart_type = Some("ma".into());
        concept.chart_scenario = Some("bullish".into());
        let view = dispatch(&concept);
        assert_eq!(view.layout.name(), "narrative");
        let chart = view.layout.chart().unwrap();
        assert_eq!(chart.header.title, "MA • 多头趋势 / 金叉");
        assert_eq!(chart.header.category, ScenarioCategory::Bullish);
    }

    #[test]
    fn test_general_section_renders_as_narrative_with_chart() {
        let mut quiz = section(SectionType::General, "小测验", SectionBody::Text("选出金叉".into()));
        quiz.chart_type = Some("macd".into());
        let view = dispatch(&quiz);
        assert_eq!(view.layout.name(), "narrative");
        assert!(!view.warning_marker);
        assert_eq!(view.layout.chart().unwrap().header.title, "MACD • 多头趋势 / 金叉");
    }

    #[test]
    fn test_missing_or_unknown_scenario_defaults_to_bullish() {
        let mut case = section(SectionType::CaseStudy, "推演", SectionBody::Text("x".into()));
        case.chart_type = Some("rsi".into());
        let view = dispatch(&case);
        assert_eq!(view.layout.chart().unwrap().header.title, "RSI • 多头趋势 / 金叉");

        case.chart_scenario = Some("moonshot".into());
        let view = dispatch(&case);
        assert_eq!(view.layout.chart().unwrap().header.title, "RSI • 多头趋势 / 金叉");
        if let SectionLayout::CaseStudy { heading, .. } = &view.layout {
            assert_eq!(heading, CASE_STUDY_HEADING);
        } else {
            panic!("expected case study layout");
        }
    }

    #[test]
    fn test_unknown_kind_renders_placeholder() {
        let mut concept = section(SectionType::Concept, "一目均衡", SectionBody::Text("x".into()));
        concept.chart_type = Some("ichimoku".into());
        let view = dispatch(&concept);
        let chart = view.layout.chart().unwrap();
        assert!(chart.svg.contains(PLACEHOLDER_MESSAGE));
    }

    #[test]
    fn test_non_chart_sections_ignore_chart_type() {
        let mut tips = section(
            SectionType::Tips,
            "笔记",
            SectionBody::Text("第一条\n第二条".into()),
        );
        tips.chart_type = Some("macd".into());
        let view = dispatch(&tips);
        assert!(view.layout.chart().is_none());
        assert_eq!(
            view.layout,
            SectionLayout::TipCallout {
                heading: TIPS_HEADING.to_string(),
                items: vec!["第一条".into(), "第二条".into()],
            }
        );
    }

    #[test]
    fn test_list_sell_flag_and_discipline_marker() {
        let sell = dispatch(&section(
            SectionType::List,
            "卖出信号",
            SectionBody::Items(vec!["死叉".into()]),
        ));
        assert_eq!(
            sell.layout,
            SectionLayout::SignalList {
                items: vec!["死叉".into()],
                sell: true
            }
        );
        let buy = dispatch(&section(
            SectionType::List,
            "买入信号",
            SectionBody::Items(vec![]),
        ));
        assert!(matches!(buy.layout, SectionLayout::SignalList { sell: false, .. }));
        assert!(is_sell_list("做空条件"));

        let discipline = dispatch(&section(
            SectionType::Discipline,
            "铁律",
            SectionBody::Items(vec!["止损".into()]),
        ));
        assert!(discipline.warning_marker);
        assert!(!buy.warning_marker);
    }

    #[test]
    fn test_real_world_and_process() {
        let mut real = section(
            SectionType::RealWorld,
            "2015 股灾",
            SectionBody::Items(vec!["a".into(), "b".into()]),
        );
        real.asset = Some("上证指数".into());
        real.date = Some("2015-06".into());
        let view = dispatch(&real);
        assert_eq!(
            view.layout,
            SectionLayout::HistoricalReview {
                banner: HISTORICAL_BANNER.to_string(),
                asset: Some("上证指数".into()),
                date: Some("2015-06".into()),
                text: "a\nb".into(),
            }
        );

        let process = dispatch(&section(
            SectionType::Process,
            "流程",
            SectionBody::Text("一\n二\n三".into()),
        ));
        assert!(matches!(
            process.layout,
            SectionLayout::ProcessTimeline { ref steps } if steps.len() == 3
        ));
    }
}
