use super::config::EmaConfig;
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, when, Expr};

/// 跌破之后均线翻到价格上方，其余时刻在价格下方
pub fn ema_expr(config: &EmaConfig) -> Expr {
    let price = col(FieldName::Price.as_str());
    when(col(&config.after_break_col))
        .then(price.clone() + lit(config.above_offset))
        .otherwise(price - lit(config.below_offset))
        .alias(FieldName::Ema.as_str())
}
