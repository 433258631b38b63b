use pyo3::{create_exception, exceptions::PyException, prelude::*, PyTypeInfo};

use super::error::GeneratorError;

create_exception!(pyo3_concept_chart.errors, PyGeneratorError, PyException);
create_exception!(
    pyo3_concept_chart.errors,
    PyUnknownIndicatorError,
    PyGeneratorError
);
create_exception!(
    pyo3_concept_chart.errors,
    PyUnknownScenarioError,
    PyGeneratorError
);
create_exception!(
    pyo3_concept_chart.errors,
    PySampleSchemaError,
    PyGeneratorError
);

pub fn convert_generator_error(e: GeneratorError) -> PyErr {
    let message = e.to_string();
    match e {
        GeneratorError::UnknownIndicator(_) | GeneratorError::NotRegistered(_) => {
            PyUnknownIndicatorError::new_err(message)
        }
        GeneratorError::UnknownScenario(_) => PyUnknownScenarioError::new_err(message),
        GeneratorError::SchemaMismatch { .. } | GeneratorError::LengthMismatch { .. } => {
            PySampleSchemaError::new_err(message)
        }
    }
}

pub fn register_py_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PyGeneratorError", PyGeneratorError::type_object(m.py()))?;
    m.add(
        "PyUnknownIndicatorError",
        PyUnknownIndicatorError::type_object(m.py()),
    )?;
    m.add(
        "PyUnknownScenarioError",
        PyUnknownScenarioError::type_object(m.py()),
    )?;
    m.add(
        "PySampleSchemaError",
        PySampleSchemaError::type_object(m.py()),
    )?;
    Ok(())
}
