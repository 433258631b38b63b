use crate::types::Scenario;

pub const AVL_DEFAULT_LENGTH: usize = 50;

/// 均价线场景配置
pub struct AvlConfig {
    /// 上行（bullish / support），否则下行
    pub rising: bool,
    /// support 场景在该下标回踩一次
    pub dip_index: Option<usize>,
    pub dip_size: f64,
    pub start_price: f64,
    pub line_offset: f64,
}

impl AvlConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            rising: matches!(scenario, Scenario::Bullish | Scenario::Support),
            dip_index: (scenario == Scenario::Support).then_some(25),
            dip_size: 3.0,
            start_price: 50.0,
            line_offset: 2.0,
        }
    }
}
