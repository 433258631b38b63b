use crate::types::Scenario;

pub const BOLL_DEFAULT_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollMode {
    /// 收口：窄带宽围绕 100 摆动
    Squeeze,
    /// 开口：expand_after 之后带宽放大且价格单边上行
    Expansion,
    Flat,
}

/// 布林带场景配置
pub struct BollConfig {
    pub mode: BollMode,
    /// 贴上轨运行：上轨紧贴价格
    pub ride_upper: bool,
    pub start_price: f64,
    pub base_volatility: f64,
    pub squeeze_volatility: f64,
    pub calm_volatility: f64,
    pub expanded_volatility: f64,
    pub expand_after: usize,
    pub ride_gap: f64,
    pub volatility_col: String,
}

impl BollConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let mode = match scenario {
            Scenario::Squeeze => BollMode::Squeeze,
            Scenario::RideUpper | Scenario::BreakoutUp => BollMode::Expansion,
            _ => BollMode::Flat,
        };
        Self {
            mode,
            ride_upper: scenario == Scenario::RideUpper,
            start_price: 100.0,
            base_volatility: 5.0,
            squeeze_volatility: 1.5,
            calm_volatility: 2.0,
            expanded_volatility: 8.0,
            expand_after: 30,
            ride_gap: 1.0,
            volatility_col: "volatility".to_string(),
        }
    }
}
