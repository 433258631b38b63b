use crate::error::GeneratorError;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 教科书式的行情场景（封闭枚举，18 种）
///
/// 不是每个场景对每种指标都有意义，未处理的组合由生成器走默认分支。
#[cfg_attr(feature = "python", gen_stub_pyclass_enum)]
#[cfg_attr(feature = "python", pyclass(eq, eq_int, hash, frozen))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Bullish,
    Bearish,
    Consolidation,
    DivergenceBull,
    DivergenceBear,
    Squeeze,
    BreakoutUp,
    BreakoutDown,
    Support,
    Resistance,
    Reversal,
    RideUpper,
    Overbought,
    Oversold,
    ResonanceBull,
    ResonanceBear,
    RefuseDeath,
    AirRefuel,
}

impl Scenario {
    pub const ALL: [Scenario; 18] = [
        Self::Bullish,
        Self::Bearish,
        Self::Consolidation,
        Self::DivergenceBull,
        Self::DivergenceBear,
        Self::Squeeze,
        Self::BreakoutUp,
        Self::BreakoutDown,
        Self::Support,
        Self::Resistance,
        Self::Reversal,
        Self::RideUpper,
        Self::Overbought,
        Self::Oversold,
        Self::ResonanceBull,
        Self::ResonanceBear,
        Self::RefuseDeath,
        Self::AirRefuel,
    ];

    /// 返回稳定的业务键名（与内容数据中的 chartScenario 一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Consolidation => "consolidation",
            Self::DivergenceBull => "divergence_bull",
            Self::DivergenceBear => "divergence_bear",
            Self::Squeeze => "squeeze",
            Self::BreakoutUp => "breakout_up",
            Self::BreakoutDown => "breakout_down",
            Self::Support => "support",
            Self::Resistance => "resistance",
            Self::Reversal => "reversal",
            Self::RideUpper => "ride_upper",
            Self::Overbought => "overbought",
            Self::Oversold => "oversold",
            Self::ResonanceBull => "resonance_bull",
            Self::ResonanceBear => "resonance_bear",
            Self::RefuseDeath => "refuse_death",
            Self::AirRefuel => "air_refuel",
        }
    }

    /// 多空归类（显式表，不做子串匹配）
    pub fn category(&self) -> ScenarioCategory {
        match self {
            Self::Bullish
            | Self::DivergenceBull
            | Self::BreakoutUp
            | Self::Support
            | Self::RideUpper
            | Self::ResonanceBull => ScenarioCategory::Bullish,
            Self::Bearish | Self::DivergenceBear | Self::BreakoutDown | Self::ResonanceBear => {
                ScenarioCategory::Bearish
            }
            _ => ScenarioCategory::Neutral,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.as_str() == key)
            .ok_or_else(|| GeneratorError::UnknownScenario(s.to_string()))
    }
}

/// 场景的多空归类，用于图表标题前的状态灯
#[cfg_attr(feature = "python", gen_stub_pyclass_enum)]
#[cfg_attr(feature = "python", pyclass(eq, eq_int, hash, frozen))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    Bullish,
    Bearish,
    Neutral,
}

impl ScenarioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }

    /// 状态灯颜色
    pub fn status_color(&self) -> &'static str {
        match self {
            Self::Bullish => "#22c55e",
            Self::Bearish => "#ef4444",
            Self::Neutral => "#eab308",
        }
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl Scenario {
    /// 从业务键名解析
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(key: &str) -> PyResult<Self> {
        Ok(key.parse::<Self>().map_err(crate::error::ViewerError::from)?)
    }

    #[pyo3(name = "as_str")]
    pub fn py_as_str(&self) -> &'static str {
        self.as_str()
    }

    fn __str__(&self) -> String {
        self.as_str().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Scenario.{}", self.as_str())
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl ScenarioCategory {
    #[pyo3(name = "as_str")]
    pub fn py_as_str(&self) -> &'static str {
        self.as_str()
    }

    fn __str__(&self) -> String {
        self.as_str().to_string()
    }
}
