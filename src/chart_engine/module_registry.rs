use super::top_level_api::{
    py_build_gallery, py_generate_samples, py_init_logging, py_plan_for, py_render_chapter,
    py_render_chart, py_scenario_category, py_scenario_label, py_toggle_completion,
};
use pyo3::prelude::*;

/// 注册 PyO3 模块的所有函数。
pub fn register_py_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_generate_samples, m)?)?;
    m.add_function(wrap_pyfunction!(py_plan_for, m)?)?;
    m.add_function(wrap_pyfunction!(py_scenario_label, m)?)?;
    m.add_function(wrap_pyfunction!(py_scenario_category, m)?)?;
    m.add_function(wrap_pyfunction!(py_render_chart, m)?)?;
    m.add_function(wrap_pyfunction!(py_build_gallery, m)?)?;
    m.add_function(wrap_pyfunction!(py_render_chapter, m)?)?;
    m.add_function(wrap_pyfunction!(py_toggle_completion, m)?)?;
    m.add_function(wrap_pyfunction!(py_init_logging, m)?)?;
    Ok(())
}
