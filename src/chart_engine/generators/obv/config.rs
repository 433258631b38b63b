use crate::types::Scenario;

pub const OBV_DEFAULT_LENGTH: usize = 50;

/// OBV 累积方式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObvFlow {
    /// 放量吸筹：每步 +base + U * jitter
    Accumulate { base: f64, jitter: f64 },
    /// 顶背离：价格上涨而 OBV 每步减少
    Distribute { step: f64 },
    Flat,
}

/// OBV 场景配置：价格始终单调上行
pub struct ObvConfig {
    pub flow: ObvFlow,
    pub start_price: f64,
    pub price_step: f64,
    pub start_obv: f64,
}

impl ObvConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let flow = match scenario {
            Scenario::Bullish => ObvFlow::Accumulate {
                base: 50.0,
                jitter: 20.0,
            },
            Scenario::DivergenceBear => ObvFlow::Distribute { step: 20.0 },
            _ => ObvFlow::Flat,
        };
        Self {
            flow,
            start_price: 50.0,
            price_step: 1.0,
            start_obv: 1000.0,
        }
    }
}
