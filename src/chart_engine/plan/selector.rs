use crate::chart_engine::utils::FieldName;
use crate::types::{
    AxisId, AxisSpec, ChartFamily, ChartPlan, ColorRule, ConditionalAnnotation, IndicatorKind,
    ReferenceLine, Scenario, SeriesSpec,
};
use tracing::warn;

pub const PLACEHOLDER_MESSAGE: &str = "此指标图表正在生成中...";

const UP_COLOR: &str = "#22c55e";
const DOWN_COLOR: &str = "#ef4444";
const PRICE_COLOR: &str = "#ffffff";
const YELLOW: &str = "#facc15";
const PINK: &str = "#f472b6";
const BLUE: &str = "#60a5fa";
const VIOLET: &str = "#a78bfa";

/// 指标 → 绘图方案（纯函数，且对每个指标都有定义）
pub fn plan_for(kind: IndicatorKind) -> ChartPlan {
    match kind {
        IndicatorKind::Ma => ma_plan(),
        IndicatorKind::Ema => ema_plan(),
        IndicatorKind::Boll => boll_plan(),
        IndicatorKind::Macd => macd_plan(),
        IndicatorKind::Sar => sar_plan(),
        IndicatorKind::SuperTrend => supertrend_plan(),
        IndicatorKind::Avl => avl_plan(),
        IndicatorKind::Obv => obv_plan(),
        IndicatorKind::Vol => vol_plan(),
        IndicatorKind::Rsi | IndicatorKind::Wr | IndicatorKind::StochRsi | IndicatorKind::Kdj => {
            oscillator_plan(kind)
        }
    }
}

/// 从原始字符串取方案；无法识别的指标返回占位方案而不是错误
pub fn plan_for_key(key: &str) -> ChartPlan {
    match key.parse::<IndicatorKind>() {
        Ok(kind) => plan_for(kind),
        Err(e) => {
            warn!(key, error = %e, "unsupported chart type, using placeholder");
            ChartPlan::placeholder(PLACEHOLDER_MESSAGE)
        }
    }
}

fn base_plan(kind: IndicatorKind, family: ChartFamily, series: Vec<SeriesSpec>) -> ChartPlan {
    ChartPlan {
        kind: Some(kind),
        family,
        series,
        axes: vec![AxisSpec::auto(AxisId::Left)],
        dual_axis: false,
        reference_lines: Vec::new(),
        annotations: Vec::new(),
        placeholder: None,
    }
}

fn price_line(width: f64) -> SeriesSpec {
    SeriesSpec::line(FieldName::Price.as_str(), "价格", PRICE_COLOR, width)
}

fn marker(scenario: Scenario, t: i64, color: &str, label: &str) -> ConditionalAnnotation {
    ConditionalAnnotation::new(&[scenario], ReferenceLine::vertical(t, color, label))
}

fn ma_plan() -> ChartPlan {
    let mut plan = base_plan(
        IndicatorKind::Ma,
        ChartFamily::Line,
        vec![
            SeriesSpec::line(FieldName::Price.as_str(), "价格", "#9ca3af", 1.0),
            SeriesSpec::line(FieldName::Ma5.as_str(), "MA5", "#fbbf24", 2.0),
            SeriesSpec::line(FieldName::Ma10.as_str(), "MA10", PINK, 2.0),
            SeriesSpec::line(FieldName::Ma20.as_str(), "MA20", BLUE, 2.0),
            SeriesSpec::line(FieldName::Ma60.as_str(), "MA60", VIOLET, 2.0),
        ],
    );
    plan.annotations
        .push(marker(Scenario::RefuseDeath, 40, "green", "拒绝死叉"));
    plan
}

fn ema_plan() -> ChartPlan {
    let mut plan = base_plan(
        IndicatorKind::Ema,
        ChartFamily::Line,
        vec![
            price_line(2.0),
            SeriesSpec::line(FieldName::Ema.as_str(), "EMA", YELLOW, 2.0),
        ],
    );
    plan.annotations
        .push(marker(Scenario::BreakoutDown, 25, "red", "跌破"));
    plan.annotations
        .push(marker(Scenario::AirRefuel, 25, "green", "回踩不破"));
    plan
}

fn boll_plan() -> ChartPlan {
    base_plan(
        IndicatorKind::Boll,
        ChartFamily::AreaLine,
        vec![
            SeriesSpec::area(FieldName::Upper.as_str(), "上轨", BLUE, 0.1),
            SeriesSpec::area(FieldName::Lower.as_str(), "下轨", BLUE, 0.1),
            SeriesSpec::line(FieldName::Upper.as_str(), "上轨", BLUE, 1.0).with_opacity(0.5),
            SeriesSpec::line(FieldName::Lower.as_str(), "下轨", BLUE, 1.0).with_opacity(0.5),
            price_line(2.0),
        ],
    )
}

fn macd_plan() -> ChartPlan {
    let mut plan = base_plan(
        IndicatorKind::Macd,
        ChartFamily::BarLine,
        vec![
            SeriesSpec::bar(FieldName::Hist.as_str(), "动能柱", UP_COLOR, 4.0).with_color_rule(
                ColorRule::SignOf {
                    positive: UP_COLOR.to_string(),
                    negative: DOWN_COLOR.to_string(),
                },
            ),
            SeriesSpec::line(FieldName::Macd.as_str(), "DIF", YELLOW, 2.0),
            SeriesSpec::line(FieldName::Signal.as_str(), "DEA", PINK, 2.0),
        ],
    );
    plan.reference_lines
        .push(ReferenceLine::horizontal(0.0, "#6b7280"));
    plan.annotations
        .push(marker(Scenario::AirRefuel, 35, "yellow", "空中加油"));
    plan
}

fn sar_plan() -> ChartPlan {
    base_plan(
        IndicatorKind::Sar,
        ChartFamily::ScatterLine,
        vec![
            price_line(2.0),
            SeriesSpec::scatter(FieldName::SarUp.as_str(), "SAR", UP_COLOR, 3.0),
            SeriesSpec::scatter(FieldName::SarDown.as_str(), "SAR", YELLOW, 3.0),
        ],
    )
}

fn supertrend_plan() -> ChartPlan {
    base_plan(
        IndicatorKind::SuperTrend,
        ChartFamily::SteppedDualLine,
        vec![
            price_line(2.0),
            SeriesSpec::step(FieldName::StUp.as_str(), "做多止损", UP_COLOR, 3.0),
            SeriesSpec::step(FieldName::StDown.as_str(), "做空止损", DOWN_COLOR, 3.0),
        ],
    )
}

fn avl_plan() -> ChartPlan {
    base_plan(
        IndicatorKind::Avl,
        ChartFamily::Line,
        vec![
            price_line(2.0),
            SeriesSpec::line(FieldName::Avl.as_str(), "均价线(AVL)", YELLOW, 2.0),
        ],
    )
}

fn obv_plan() -> ChartPlan {
    let mut plan = base_plan(
        IndicatorKind::Obv,
        ChartFamily::Line,
        vec![
            price_line(1.0).with_opacity(0.5),
            SeriesSpec::line(FieldName::Obv.as_str(), "OBV", YELLOW, 2.0).on_axis(AxisId::Right),
        ],
    );
    plan.axes.push(AxisSpec::auto(AxisId::Right));
    plan.dual_axis = true;
    plan
}

fn vol_plan() -> ChartPlan {
    let mut plan = base_plan(
        IndicatorKind::Vol,
        ChartFamily::BarLine,
        vec![
            price_line(2.0),
            SeriesSpec::bar(FieldName::Vol.as_str(), "成交量", UP_COLOR, 4.0)
                .on_axis(AxisId::Right)
                .with_opacity(0.5)
                .with_color_rule(ColorRule::Flag {
                    field: FieldName::IsUp.as_str().to_string(),
                    on: UP_COLOR.to_string(),
                    off: DOWN_COLOR.to_string(),
                }),
        ],
    );
    plan.axes.push(AxisSpec::zero_based(AxisId::Right));
    plan.dual_axis = true;
    plan
}

fn oscillator_plan(kind: IndicatorKind) -> ChartPlan {
    let series = if kind == IndicatorKind::Kdj {
        vec![
            SeriesSpec::line(FieldName::K.as_str(), "K", PRICE_COLOR, 1.0),
            SeriesSpec::line(FieldName::D.as_str(), "D", YELLOW, 1.0),
            SeriesSpec::line(FieldName::J.as_str(), "J", VIOLET, 2.0),
        ]
    } else {
        vec![SeriesSpec::line(
            FieldName::Val.as_str(),
            &kind.display_name(),
            "#818cf8",
            2.0,
        )]
    };

    let (axis, upper, lower) = if kind == IndicatorKind::Wr {
        (AxisSpec::fixed(AxisId::Left, -100.0, 0.0), -20.0, -80.0)
    } else {
        (AxisSpec::fixed(AxisId::Left, 0.0, 100.0), 80.0, 20.0)
    };

    let mut plan = base_plan(kind, ChartFamily::Line, series);
    plan.axes = vec![axis];
    plan.reference_lines = vec![
        ReferenceLine::horizontal(upper, DOWN_COLOR),
        ReferenceLine::horizontal(lower, UP_COLOR),
    ];
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_engine::generators::get_generator;
    use crate::types::AxisDomain;

    #[test]
    fn test_plan_for_is_pure_and_total() {
        for kind in IndicatorKind::ALL {
            let first = plan_for(kind);
            assert_eq!(first, plan_for(kind));
            assert_eq!(first.kind, Some(kind));
            assert!(!first.is_placeholder());
        }
    }

    #[test]
    fn test_unknown_key_yields_placeholder() {
        let plan = plan_for_key("ichimoku");
        assert!(plan.is_placeholder());
        assert_eq!(plan.placeholder.as_deref(), Some(PLACEHOLDER_MESSAGE));
        assert!(plan.series.is_empty());
        assert_eq!(plan, plan_for_key("ichimoku"));
        assert_eq!(plan_for_key("MACD"), plan_for(IndicatorKind::Macd));
    }

    #[test]
    fn test_series_reference_generated_fields() {
        for kind in IndicatorKind::ALL {
            let fields: Vec<&str> = get_generator(kind)
                .unwrap()
                .fields()
                .iter()
                .map(|f| f.as_str())
                .collect();
            for field in plan_for(kind).required_fields() {
                assert!(fields.contains(&field), "{kind} plan uses missing field {field}");
            }
        }
    }

    #[test]
    fn test_oscillator_domains_are_fixed() {
        let wr = plan_for(IndicatorKind::Wr);
        assert_eq!(
            wr.axis(AxisId::Left).map(|a| a.domain),
            Some(AxisDomain::Fixed {
                min: -100.0,
                max: 0.0
            })
        );
        let rsi = plan_for(IndicatorKind::Rsi);
        assert_eq!(
            rsi.axis(AxisId::Left).map(|a| a.domain),
            Some(AxisDomain::Fixed {
                min: 0.0,
                max: 100.0
            })
        );
        assert_eq!(rsi.reference_lines.len(), 2);
    }

    #[test]
    fn test_dual_axis_kinds() {
        for kind in IndicatorKind::ALL {
            let plan = plan_for(kind);
            let expect_dual = matches!(kind, IndicatorKind::Obv | IndicatorKind::Vol);
            assert_eq!(plan.dual_axis, expect_dual, "{kind}");
            assert_eq!(plan.axis(AxisId::Right).is_some(), expect_dual);
        }
    }

    #[test]
    fn test_volume_axis_starts_at_zero() {
        let vol = plan_for(IndicatorKind::Vol);
        assert_eq!(
            vol.axis(AxisId::Right).map(|a| a.domain),
            Some(AxisDomain::ZeroBased)
        );
        let obv = plan_for(IndicatorKind::Obv);
        assert_eq!(obv.axis(AxisId::Right).map(|a| a.domain), Some(AxisDomain::Auto));
    }

    #[test]
    fn test_conditional_markers() {
        let ma = plan_for(IndicatorKind::Ma);
        assert_eq!(ma.lines_for(Scenario::RefuseDeath).len(), 1);
        assert!(ma.lines_for(Scenario::Bullish).is_empty());

        let ema = plan_for(IndicatorKind::Ema);
        let labels: Vec<_> = ema
            .lines_for(Scenario::AirRefuel)
            .iter()
            .filter_map(|line| line.label.clone())
            .collect();
        assert_eq!(labels, vec!["回踩不破".to_string()]);
    }
}
