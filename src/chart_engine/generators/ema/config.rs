use crate::types::Scenario;

pub const EMA_DEFAULT_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmaShape {
    Trend,
    /// 先缓涨，在 break_index 之后急跌并跌破均线
    BreakDown,
    /// 稳步上行，中途回踩均线不破
    AirRefuel,
    Flat,
}

/// EMA 场景配置
pub struct EmaConfig {
    pub shape: EmaShape,
    pub start_price: f64,
    pub break_index: usize,
    /// 回踩区间（开区间）
    pub refuel_window: (usize, usize),
    /// 价格在均线上方时，均线 = price - below_offset
    pub below_offset: f64,
    /// 跌破之后，均线 = price + above_offset
    pub above_offset: f64,
    pub after_break_col: String,
}

impl EmaConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let shape = match scenario {
            Scenario::Bullish => EmaShape::Trend,
            Scenario::BreakoutDown => EmaShape::BreakDown,
            Scenario::AirRefuel => EmaShape::AirRefuel,
            _ => EmaShape::Flat,
        };
        Self {
            shape,
            start_price: 50.0,
            break_index: 25,
            refuel_window: (20, 30),
            below_offset: 2.0,
            above_offset: 5.0,
            after_break_col: "after_break".to_string(),
        }
    }
}
