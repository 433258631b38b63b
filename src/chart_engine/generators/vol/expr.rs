use super::config::VolConfig;
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, when, Expr};

pub fn vol_expr(config: &VolConfig) -> Expr {
    when(col(&config.after_split_col))
        .then(col(&config.base_volume_col) + lit(config.volume_shift()))
        .otherwise(col(&config.base_volume_col))
        .alias(FieldName::Vol.as_str())
}
