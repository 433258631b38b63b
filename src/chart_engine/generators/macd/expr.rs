use super::config::MacdConfig;
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, when, Expr};

/// DEA 表达式
pub fn signal_expr(config: &MacdConfig) -> Expr {
    let dif = col(FieldName::Macd.as_str());
    when(col(&config.in_refuel_col))
        .then(dif.clone() - lit(config.refuel_gap))
        .otherwise(dif * lit(config.signal_ratio))
        .alias(FieldName::Signal.as_str())
}

/// 动能柱表达式，依赖已写入的 signal 列
pub fn hist_expr(config: &MacdConfig) -> Expr {
    ((col(FieldName::Macd.as_str()) - col(FieldName::Signal.as_str())) * lit(config.hist_scale))
        .alias(FieldName::Hist.as_str())
}
