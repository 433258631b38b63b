use crate::error::GeneratorError;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 指标种类（封闭枚举）
///
/// 决定运行哪个场景生成器，以及样本点携带哪些字段。
#[cfg_attr(feature = "python", gen_stub_pyclass_enum)]
#[cfg_attr(feature = "python", pyclass(eq, eq_int, hash, frozen))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Ma,
    Ema,
    Boll,
    Macd,
    Rsi,
    Wr,
    Kdj,
    StochRsi,
    Vol,
    SuperTrend,
    Sar,
    Avl,
    Obv,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 13] = [
        Self::Ma,
        Self::Ema,
        Self::Boll,
        Self::Macd,
        Self::Rsi,
        Self::Wr,
        Self::Kdj,
        Self::StochRsi,
        Self::Vol,
        Self::SuperTrend,
        Self::Sar,
        Self::Avl,
        Self::Obv,
    ];

    /// 返回稳定的业务键名（与内容数据中的 chartType 一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ma => "ma",
            Self::Ema => "ema",
            Self::Boll => "boll",
            Self::Macd => "macd",
            Self::Rsi => "rsi",
            Self::Wr => "wr",
            Self::Kdj => "kdj",
            Self::StochRsi => "stochrsi",
            Self::Vol => "vol",
            Self::SuperTrend => "supertrend",
            Self::Sar => "sar",
            Self::Avl => "avl",
            Self::Obv => "obv",
        }
    }

    /// 图表标题里使用的大写名称
    pub fn display_name(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| GeneratorError::UnknownIndicator(s.to_string()))
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl IndicatorKind {
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
        format!("IndicatorKind.{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_key() {
        for kind in IndicatorKind::ALL {
            assert_eq!(kind.as_str().parse::<IndicatorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(" MACD ".parse::<IndicatorKind>().unwrap(), IndicatorKind::Macd);
        assert!(matches!(
            "ichimoku".parse::<IndicatorKind>(),
            Err(GeneratorError::UnknownIndicator(_))
        ));
    }

    #[test]
    fn test_serde_uses_content_keys() {
        let json = serde_json::to_string(&IndicatorKind::StochRsi).unwrap();
        assert_eq!(json, "\"stochrsi\"");
        let kind: IndicatorKind = serde_json::from_str("\"supertrend\"").unwrap();
        assert_eq!(kind, IndicatorKind::SuperTrend);
    }
}
