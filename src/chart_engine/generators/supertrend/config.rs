use crate::types::Scenario;

pub const SUPERTREND_DEFAULT_LENGTH: usize = 60;

/// SuperTrend 场景配置：始终从多头开始
pub struct SuperTrendConfig {
    pub flip_after: Option<usize>,
    pub start_price: f64,
    /// 多头每步 up_step + U，空头每步 -(down_step + U)
    pub up_step: f64,
    pub down_step: f64,
    pub stop_offset: f64,
    pub regime_up_col: String,
}

impl SuperTrendConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            flip_after: (scenario == Scenario::Reversal).then_some(30),
            start_price: 100.0,
            up_step: 0.5,
            down_step: 1.0,
            stop_offset: 5.0,
            regime_up_col: "regime_up".to_string(),
        }
    }
}
