//! 样本字段名统一管理
//!
//! 生成器、绘图方案与渲染器都通过该枚举引用列名，避免硬编码字符串。

use polars::prelude::PlSmallStr;

/// 样本字段枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    // 时间轴
    T,

    // 价格与均线
    Price,
    Ma5,
    Ma10,
    Ma20,
    Ma60,
    Ema,
    Avl,

    // 布林带
    Upper,
    Lower,

    // MACD
    Macd,
    Signal,
    Hist,

    // 趋势止损
    SarUp,
    SarDown,
    StUp,
    StDown,

    // 量能
    Obv,
    Vol,
    IsUp,

    // 振荡器
    Val,
    K,
    D,
    J,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::T => "t",
            FieldName::Price => "price",
            FieldName::Ma5 => "ma5",
            FieldName::Ma10 => "ma10",
            FieldName::Ma20 => "ma20",
            FieldName::Ma60 => "ma60",
            FieldName::Ema => "ema",
            FieldName::Avl => "avl",
            FieldName::Upper => "upper",
            FieldName::Lower => "lower",
            FieldName::Macd => "macd",
            FieldName::Signal => "signal",
            FieldName::Hist => "hist",
            FieldName::SarUp => "sar_up",
            FieldName::SarDown => "sar_down",
            FieldName::StUp => "st_up",
            FieldName::StDown => "st_down",
            FieldName::Obv => "obv",
            FieldName::Vol => "vol",
            FieldName::IsUp => "is_up",
            FieldName::Val => "val",
            FieldName::K => "k",
            FieldName::D => "d",
            FieldName::J => "j",
        }
    }

    pub fn as_pl_small_str(&self) -> PlSmallStr {
        PlSmallStr::from_static(self.as_str())
    }

    /// 布尔字段（其余字段均为可空 Float64）
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldName::IsUp)
    }
}

impl From<FieldName> for PlSmallStr {
    fn from(field: FieldName) -> Self {
        field.as_pl_small_str()
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
