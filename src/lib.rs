pub mod catalog;
pub mod chart_engine;
pub mod error;
pub mod logging;
pub mod types;

pub use catalog::{Catalog, CompletionState, ProgressStore};
pub use chart_engine::plan::{plan_for, plan_for_key};
pub use chart_engine::{build_chart, build_gallery, generate_samples};
pub use error::ViewerError;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn pyo3_concept_chart(m: &Bound<'_, PyModule>) -> PyResult<()> {
    error::py_interface::register_py_exceptions(m)?;

    m.add_class::<types::IndicatorKind>()?;
    m.add_class::<types::Scenario>()?;
    m.add_class::<types::ScenarioCategory>()?;
    m.add_class::<types::GenerateConfig>()?;
    m.add_class::<types::RenderConfig>()?;
    m.add_class::<types::ViewerConfig>()?;
    m.add_class::<types::ConceptChart>()?;
    m.add_class::<types::ChartHeader>()?;
    m.add_class::<types::RenderedChart>()?;

    chart_engine::module_registry::register_py_module(m)?;
    Ok(())
}

#[cfg(feature = "python")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);
