use crate::types::inputs::ScenarioCategory;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;
use serde::{Deserialize, Serialize};

/// 图表标题栏：状态灯 + "KIND • 场景名" + SIMULATION 徽标
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartHeader {
    pub title: String,
    pub category: ScenarioCategory,
    pub status_color: String,
    pub badge: String,
}

/// 渲染结果
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub header: ChartHeader,
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl RenderedChart {
    fn __repr__(&self) -> String {
        format!(
            "RenderedChart(title={:?}, {}x{})",
            self.header.title, self.width, self.height
        )
    }
}
