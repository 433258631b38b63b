use super::config::BollConfig;
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, Expr};

/// 上下轨表达式
pub fn boll_exprs(config: &BollConfig) -> (Expr, Expr) {
    let price = col(FieldName::Price.as_str());
    let volatility = col(&config.volatility_col);

    let upper = if config.ride_upper {
        price.clone() + lit(config.ride_gap)
    } else {
        price.clone() + volatility.clone()
    }
    .alias(FieldName::Upper.as_str());
    let lower = (price - volatility).alias(FieldName::Lower.as_str());

    (upper, lower)
}
