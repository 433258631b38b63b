use crate::error::{GeneratorError, ViewerError};
use crate::types::inputs::{IndicatorKind, Scenario};
use polars::prelude::*;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::IntoPyObjectExt;
#[cfg(feature = "python")]
use pyo3_polars::PyDataFrame;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;
use std::collections::BTreeMap;

/// 样本序列中的一个离散时间点（行视图）
///
/// values 存放数值字段（可能为 null），flags 存放布尔字段（如 is_up）。
/// 同一序列中所有点的键集合完全一致。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SamplePoint {
    pub t: i64,
    pub values: BTreeMap<String, Option<f64>>,
    pub flags: BTreeMap<String, bool>,
}

impl SamplePoint {
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().flatten()
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.flags.get(field).copied()
    }

    /// 该点携带的全部字段名（数值 + 布尔）
    pub fn keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .chain(self.flags.keys())
            .map(String::as_str)
            .collect()
    }
}

// 为解决 DataFrame 不满足 PyStubType 的问题，字段为 pub(crate)，通过 getter 暴露
/// 一次生成的结果：指标种类、场景与样本表
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone)]
pub struct ConceptChart {
    pub(crate) kind: IndicatorKind,
    pub(crate) scenario: Scenario,
    pub(crate) samples: DataFrame,
}

impl ConceptChart {
    pub fn new(kind: IndicatorKind, scenario: Scenario, samples: DataFrame) -> Self {
        Self {
            kind,
            scenario,
            samples,
        }
    }

    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn samples(&self) -> &DataFrame {
        &self.samples
    }

    pub fn into_samples(self) -> DataFrame {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.height()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.height() == 0
    }

    /// t 之后的字段名（按列顺序）
    pub fn fields(&self) -> Vec<String> {
        self.samples
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != "t")
            .map(|name| name.to_string())
            .collect()
    }

    pub fn column_f64(&self, field: &str) -> Result<Vec<Option<f64>>, ViewerError> {
        let series = self.samples.column(field)?.as_materialized_series();
        Ok(series.f64()?.into_iter().collect())
    }

    pub fn column_bool(&self, field: &str) -> Result<Vec<Option<bool>>, ViewerError> {
        let series = self.samples.column(field)?.as_materialized_series();
        Ok(series.bool()?.into_iter().collect())
    }

    /// 展开为逐点视图
    pub fn points(&self) -> Result<Vec<SamplePoint>, ViewerError> {
        let t_values: Vec<Option<i64>> = self
            .samples
            .column("t")?
            .as_materialized_series()
            .i64()?
            .into_iter()
            .collect();

        let mut numeric: Vec<(String, Vec<Option<f64>>)> = Vec::new();
        let mut boolean: Vec<(String, Vec<Option<bool>>)> = Vec::new();
        for field in self.fields() {
            match self.samples.column(&field)?.dtype() {
                DataType::Boolean => {
                    let values = self.column_bool(&field)?;
                    boolean.push((field, values));
                }
                DataType::Float64 => {
                    let values = self.column_f64(&field)?;
                    numeric.push((field, values));
                }
                other => {
                    return Err(GeneratorError::SchemaMismatch {
                        kind: self.kind.as_str().to_string(),
                        expected: vec![format!("{field}: Float64 | Boolean")],
                        found: vec![format!("{field}: {other}")],
                    }
                    .into())
                }
            }
        }

        let points = t_values
            .iter()
            .enumerate()
            .map(|(row, t)| SamplePoint {
                t: t.unwrap_or(row as i64),
                values: numeric
                    .iter()
                    .map(|(name, column)| (name.clone(), column[row]))
                    .collect(),
                flags: boolean
                    .iter()
                    .map(|(name, column)| (name.clone(), column[row].unwrap_or(false)))
                    .collect(),
            })
            .collect();
        Ok(points)
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl ConceptChart {
    #[getter(kind)]
    pub fn py_kind(&self) -> IndicatorKind {
        self.kind
    }

    #[getter(scenario)]
    pub fn py_scenario(&self) -> Scenario {
        self.scenario
    }

    #[getter(samples)]
    pub fn py_samples<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        PyDataFrame(self.samples.clone()).into_bound_py_any(py)
    }

    /// 逐点字典列表
    #[pyo3(name = "points")]
    pub fn py_points<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let points = self.points()?;
        points.into_bound_py_any(py)
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ConceptChart(kind={}, scenario={}, len={})",
            self.kind,
            self.scenario,
            self.len()
        )
    }
}
