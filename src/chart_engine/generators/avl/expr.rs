use super::config::AvlConfig;
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, Expr};

/// 上行时均价线在价格下方（支撑），下行时在上方（压力）
pub fn avl_expr(config: &AvlConfig) -> Expr {
    let price = col(FieldName::Price.as_str());
    if config.rising {
        (price - lit(config.line_offset)).alias(FieldName::Avl.as_str())
    } else {
        (price + lit(config.line_offset)).alias(FieldName::Avl.as_str())
    }
}
