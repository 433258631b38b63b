use crate::chart_engine::utils::FieldName;
use crate::error::{GeneratorError, ViewerError};
use crate::types::IndicatorKind;
use polars::lazy::dsl::{col, lit, when, Expr};
use polars::prelude::*;

/// 轨迹步骤产出的原始列（逐步递推得到的状态量与辅助列）
pub struct Trajectory {
    len: usize,
    columns: Vec<Column>,
}

impl Trajectory {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_f64(&mut self, name: &str, values: Vec<f64>) {
        self.columns
            .push(Series::new(name.into(), values).into_column());
    }

    pub fn push_bool(&mut self, name: &str, values: Vec<bool>) {
        self.columns
            .push(Series::new(name.into(), values).into_column());
    }

    /// 在最前面补上时间轴 t（0..len-1）后转为 LazyFrame
    pub fn into_lazy(self) -> Result<LazyFrame, ViewerError> {
        let t: Vec<i64> = (0..self.len as i64).collect();
        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Series::new(FieldName::T.as_pl_small_str(), t).into_column());
        columns.extend(self.columns);
        Ok(DataFrame::new(columns)?.lazy())
    }
}

/// 条件成立时为 NULL，否则为 otherwise_expr
pub fn null_when_expr(condition: Expr, otherwise_expr: Expr) -> Expr {
    when(condition).then(lit(NULL)).otherwise(otherwise_expr)
}

/// 将表达式截断到 [min, max]
pub fn clamp_expr(expr: Expr, min: f64, max: f64) -> Expr {
    when(expr.clone().lt(lit(min)))
        .then(lit(min))
        .when(expr.clone().gt(lit(max)))
        .then(lit(max))
        .otherwise(expr)
}

/// 趋势止损的两条线：多头阶段只有 up_field 有值，空头阶段只有 down_field 有值
pub fn regime_stop_exprs(
    regime_up_col: &str,
    offset: f64,
    up_field: FieldName,
    down_field: FieldName,
) -> (Expr, Expr) {
    let price = col(FieldName::Price.as_str());
    let up = null_when_expr(
        col(regime_up_col).not(),
        price.clone() - lit(offset),
    )
    .alias(up_field.as_str());
    let down = null_when_expr(col(regime_up_col), price + lit(offset)).alias(down_field.as_str());
    (up, down)
}

/// 最终投影：只保留 t 与声明字段，辅助列在此丢弃
pub fn project_fields(lazy: LazyFrame, fields: &[FieldName]) -> Result<DataFrame, ViewerError> {
    let mut exprs = Vec::with_capacity(fields.len() + 1);
    exprs.push(col(FieldName::T.as_str()).cast(DataType::Int64));
    for field in fields {
        let dtype = if field.is_flag() {
            DataType::Boolean
        } else {
            DataType::Float64
        };
        exprs.push(col(field.as_str()).cast(dtype).alias(field.as_str()));
    }
    Ok(lazy.select(exprs).collect()?)
}

/// 校验生成结果的列与长度
pub fn validate_samples(
    kind: IndicatorKind,
    df: &DataFrame,
    fields: &[FieldName],
    expected_len: usize,
) -> Result<(), GeneratorError> {
    let expected: Vec<String> = std::iter::once(FieldName::T)
        .chain(fields.iter().copied())
        .map(|field| field.as_str().to_string())
        .collect();
    let found: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    if expected != found {
        return Err(GeneratorError::SchemaMismatch {
            kind: kind.as_str().to_string(),
            expected,
            found,
        });
    }

    if df.height() != expected_len {
        return Err(GeneratorError::LengthMismatch {
            kind: kind.as_str().to_string(),
            actual: df.height(),
            expected: expected_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_expr_bounds_values() {
        let mut trajectory = Trajectory::new(3);
        trajectory.push_f64("x", vec![-5.0, 50.0, 120.0]);
        let df = trajectory
            .into_lazy()
            .unwrap()
            .select([clamp_expr(col("x"), 0.0, 100.0).alias("x")])
            .collect()
            .unwrap();
        let values: Vec<Option<f64>> = df
            .column("x")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(0.0), Some(50.0), Some(100.0)]);
    }

    #[test]
    fn test_validate_samples_reports_schema_and_length() {
        let mut trajectory = Trajectory::new(2);
        trajectory.push_f64("val", vec![1.0, 2.0]);
        let df = trajectory.into_lazy().unwrap().collect().unwrap();

        assert!(validate_samples(IndicatorKind::Rsi, &df, &[FieldName::Val], 2).is_ok());
        assert!(matches!(
            validate_samples(IndicatorKind::Rsi, &df, &[FieldName::Val], 50),
            Err(GeneratorError::LengthMismatch { actual: 2, .. })
        ));
        assert!(matches!(
            validate_samples(IndicatorKind::Kdj, &df, &[FieldName::K], 2),
            Err(GeneratorError::SchemaMismatch { .. })
        ));
    }
}
