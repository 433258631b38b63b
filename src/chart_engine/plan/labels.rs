use crate::types::{ChartHeader, IndicatorKind, Scenario, ScenarioCategory};
use tracing::warn;

pub const SIMULATION_BADGE: &str = "SIMULATION";

/// 场景的中文展示名
pub fn scenario_label(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Bullish => "多头趋势 / 金叉",
        Scenario::Bearish => "空头趋势 / 死叉",
        Scenario::Consolidation => "震荡 / 缠绕",
        Scenario::DivergenceBull => "底背离 (看涨)",
        Scenario::DivergenceBear => "顶背离 (看跌)",
        Scenario::Squeeze => "收口 (变盘前)",
        Scenario::BreakoutUp => "放量突破 (看涨)",
        Scenario::BreakoutDown => "跌破支撑 (看跌)",
        Scenario::Support => "回踩支撑",
        Scenario::Resistance => "遇阻回落",
        Scenario::Reversal => "趋势反转",
        Scenario::RideUpper => "贴上轨运行 (强势)",
        Scenario::Overbought => "超买区",
        Scenario::Oversold => "超卖区",
        Scenario::ResonanceBull => "多头共振 (强买入)",
        Scenario::ResonanceBear => "空头共振 (强卖出)",
        Scenario::RefuseDeath => "拒绝死叉 (强中强)",
        Scenario::AirRefuel => "空中加油 (中继)",
    }
}

/// 原始字符串版本：无法识别时返回大写的原始键
pub fn label_for_key(key: &str) -> String {
    match key.parse::<Scenario>() {
        Ok(scenario) => scenario_label(scenario).to_string(),
        Err(_) => key.to_uppercase(),
    }
}

pub fn category_for(scenario: Scenario) -> ScenarioCategory {
    scenario.category()
}

/// 原始字符串版本：无法识别时归为中性
pub fn category_for_key(key: &str) -> ScenarioCategory {
    key.parse::<Scenario>()
        .map(category_for)
        .unwrap_or(ScenarioCategory::Neutral)
}

/// 内容数据里的场景字符串 → Scenario；缺省或无法识别时降级为 bullish
pub fn resolve_scenario(raw: Option<&str>) -> Scenario {
    match raw {
        None => Scenario::default(),
        Some(key) => key.parse::<Scenario>().unwrap_or_else(|e| {
            warn!(key, error = %e, "unknown scenario, falling back to bullish");
            Scenario::default()
        }),
    }
}

/// 图表标题栏
pub fn chart_header(kind: Option<IndicatorKind>, raw_kind: &str, scenario: Scenario) -> ChartHeader {
    let category = category_for(scenario);
    let kind_name = kind
        .map(|k| k.display_name())
        .unwrap_or_else(|| raw_kind.to_uppercase());
    ChartHeader {
        title: format!("{} • {}", kind_name, scenario_label(scenario)),
        category,
        status_color: category.status_color().to_string(),
        badge: SIMULATION_BADGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_has_a_label() {
        for scenario in Scenario::ALL {
            assert!(!scenario_label(scenario).is_empty());
        }
        assert_eq!(label_for_key("air_refuel"), "空中加油 (中继)");
        assert_eq!(label_for_key("double_top"), "DOUBLE_TOP");
    }

    #[test]
    fn test_category_for_key() {
        assert_eq!(category_for_key("resonance_bull"), ScenarioCategory::Bullish);
        assert_eq!(category_for_key("breakout_down"), ScenarioCategory::Bearish);
        assert_eq!(category_for_key("ride_upper"), ScenarioCategory::Bullish);
        assert_eq!(category_for_key("support"), ScenarioCategory::Bullish);
        assert_eq!(category_for_key("squeeze"), ScenarioCategory::Neutral);
        assert_eq!(category_for_key("pullup"), ScenarioCategory::Neutral);
    }

    #[test]
    fn test_resolve_scenario_falls_back_to_bullish() {
        assert_eq!(resolve_scenario(None), Scenario::Bullish);
        assert_eq!(resolve_scenario(Some("moonshot")), Scenario::Bullish);
        assert_eq!(resolve_scenario(Some("squeeze")), Scenario::Squeeze);
    }

    #[test]
    fn test_chart_header() {
        let header = chart_header(Some(IndicatorKind::Macd), "macd", Scenario::DivergenceBear);
        assert_eq!(header.title, "MACD • 顶背离 (看跌)");
        assert_eq!(header.category, ScenarioCategory::Bearish);
        assert_eq!(header.status_color, "#ef4444");
        assert_eq!(header.badge, "SIMULATION");

        let unknown = chart_header(None, "ichimoku", Scenario::Squeeze);
        assert_eq!(unknown.title, "ICHIMOKU • 收口 (变盘前)");
        assert_eq!(unknown.status_color, "#eab308");
    }
}
