use super::config::OscillatorConfig;
use crate::chart_engine::generators::utils::clamp_expr;
use crate::chart_engine::utils::FieldName;
use crate::types::IndicatorKind;
use polars::lazy::dsl::{col, lit, Expr};

/// 各振荡器输出线，全部截断到值域内
pub fn oscillator_exprs(config: &OscillatorConfig) -> Vec<Expr> {
    let strength = || col(&config.strength_col);
    let (min, max) = config.domain;

    match config.kind {
        IndicatorKind::Wr => vec![clamp_expr(strength() - lit(100.0), min, max)
            .alias(FieldName::Val.as_str())],
        IndicatorKind::Kdj => vec![
            clamp_expr(strength(), min, max).alias(FieldName::K.as_str()),
            clamp_expr(strength() - lit(config.kdj_spread), min, max).alias(FieldName::D.as_str()),
            clamp_expr(strength() + lit(config.kdj_spread), min, max).alias(FieldName::J.as_str()),
        ],
        _ => vec![clamp_expr(strength(), min, max).alias(FieldName::Val.as_str())],
    }
}
