use crate::types::{IndicatorKind, Scenario};

pub const OSCILLATOR_DEFAULT_LENGTH: usize = 50;

/// 振荡器强度轨迹（加噪声之前）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrengthPath {
    Constant(f64),
    /// start + slope * i
    Ramp { start: f64, slope: f64 },
}

impl StrengthPath {
    pub fn at(&self, i: usize) -> f64 {
        match *self {
            StrengthPath::Constant(level) => level,
            StrengthPath::Ramp { start, slope } => start + slope * i as f64,
        }
    }
}

/// 振荡器场景配置
///
/// 强度位于 [0, 100]；WR 输出为 strength - 100，因此超买靠近 0、超卖靠近 -100。
pub struct OscillatorConfig {
    pub kind: IndicatorKind,
    pub path: StrengthPath,
    pub noise_amplitude: f64,
    pub domain: (f64, f64),
    /// KDJ 中 d / j 相对 k 的偏移
    pub kdj_spread: f64,
    pub strength_col: String,
}

impl OscillatorConfig {
    pub fn for_scenario(kind: IndicatorKind, scenario: Scenario) -> Self {
        let path = match scenario {
            Scenario::Overbought => StrengthPath::Constant(85.0),
            Scenario::Oversold => StrengthPath::Constant(10.0),
            Scenario::Bullish => StrengthPath::Ramp {
                start: 40.0,
                slope: 1.0,
            },
            Scenario::DivergenceBear => StrengthPath::Ramp {
                start: 80.0,
                slope: -0.5,
            },
            Scenario::ResonanceBull => StrengthPath::Ramp {
                start: 30.0,
                slope: 1.5,
            },
            _ => StrengthPath::Constant(50.0),
        };
        let domain = if kind == IndicatorKind::Wr {
            (-100.0, 0.0)
        } else {
            (0.0, 100.0)
        };
        Self {
            kind,
            path,
            noise_amplitude: 5.0,
            domain,
            kdj_spread: 5.0,
            strength_col: "strength".to_string(),
        }
    }
}
