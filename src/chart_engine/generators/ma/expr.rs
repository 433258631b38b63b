use super::config::{MaConfig, MaShape};
use crate::chart_engine::utils::FieldName;
use polars::lazy::dsl::{col, lit, when, Expr};

/// 四条均线表达式（ma5, ma10, ma20, ma60），均为价格的偏移或缩放
pub fn ma_exprs(config: &MaConfig) -> [Expr; 4] {
    let price = || col(FieldName::Price.as_str());
    let [r5, r10, r20, r60] = config.ratios;

    match config.shape {
        MaShape::Entangled => [
            (price() + col(&config.wave_sin_col) * lit(config.wobble)).alias(FieldName::Ma5.as_str()),
            (price() + col(&config.wave_cos_col) * lit(config.wobble))
                .alias(FieldName::Ma10.as_str()),
            lit(config.pivot).alias(FieldName::Ma20.as_str()),
            lit(config.pivot).alias(FieldName::Ma60.as_str()),
        ],
        MaShape::RefuseDeath => [
            (price() * lit(r5)).alias(FieldName::Ma5.as_str()),
            when(col(&config.in_dip_col))
                .then(price() * lit(config.dip_ma10_ratio))
                .otherwise(price() * lit(r10))
                .alias(FieldName::Ma10.as_str()),
            (price() * lit(r20)).alias(FieldName::Ma20.as_str()),
            (price() * lit(r60)).alias(FieldName::Ma60.as_str()),
        ],
        _ => [
            (price() * lit(r5)).alias(FieldName::Ma5.as_str()),
            (price() * lit(r10)).alias(FieldName::Ma10.as_str()),
            (price() * lit(r20)).alias(FieldName::Ma20.as_str()),
            (price() * lit(r60)).alias(FieldName::Ma60.as_str()),
        ],
    }
}
