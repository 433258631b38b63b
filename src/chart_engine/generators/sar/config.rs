use crate::types::Scenario;

pub const SAR_DEFAULT_LENGTH: usize = 50;

/// 抛物线 SAR 场景配置
pub struct SarConfig {
    /// 初始为多头阶段
    pub start_up: bool,
    /// reversal 场景下在该下标之后翻转一次
    pub flip_after: Option<usize>,
    pub start_price: f64,
    /// 每步基础涨跌幅，另加 [0, 1) 的随机量
    pub base_step: f64,
    pub stop_offset: f64,
    pub regime_up_col: String,
}

impl SarConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            start_up: scenario == Scenario::Bullish,
            flip_after: (scenario == Scenario::Reversal).then_some(25),
            start_price: 50.0,
            base_step: 1.0,
            stop_offset: 5.0,
            regime_up_col: "regime_up".to_string(),
        }
    }
}
