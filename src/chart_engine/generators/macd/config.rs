use crate::types::Scenario;

pub const MACD_DEFAULT_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdShape {
    /// 价格创新低，DIF 抬高
    DivergenceBull,
    /// 价格创新高，DIF 走低
    DivergenceBear,
    /// DIF 自零轴下方上穿
    Rising,
    /// 上行 → 回落至零轴附近 → 再上行
    AirRefuel,
    /// DIF 自零轴上方下穿（默认）
    Falling,
}

/// MACD 场景配置
pub struct MacdConfig {
    pub shape: MacdShape,
    pub base_price: f64,
    /// DEA = DIF * signal_ratio
    pub signal_ratio: f64,
    /// 动能柱 = (DIF - DEA) * hist_scale
    pub hist_scale: f64,
    /// 空中加油时 DEA 紧贴 DIF 下方的区间（开区间）
    pub refuel_window: (usize, usize),
    pub refuel_gap: f64,
    pub in_refuel_col: String,
}

impl MacdConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let shape = match scenario {
            Scenario::DivergenceBull => MacdShape::DivergenceBull,
            Scenario::DivergenceBear => MacdShape::DivergenceBear,
            Scenario::Bullish | Scenario::ResonanceBull => MacdShape::Rising,
            Scenario::AirRefuel => MacdShape::AirRefuel,
            _ => MacdShape::Falling,
        };
        Self {
            shape,
            base_price: 100.0,
            signal_ratio: 0.8,
            hist_scale: 1.5,
            refuel_window: (35, 45),
            refuel_gap: 0.1,
            in_refuel_col: "in_refuel".to_string(),
        }
    }
}
