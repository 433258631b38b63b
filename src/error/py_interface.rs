use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::PyTypeInfo;

use super::catalog_error::py_interface::{
    convert_catalog_error, register_py_module as register_catalog_errors,
};
use super::generator_error::py_interface::{
    convert_generator_error, register_py_module as register_generator_errors,
};
use super::viewer_error::ViewerError;

create_exception!(pyo3_concept_chart.errors, PyViewerError, PyException);
create_exception!(pyo3_concept_chart.errors, PyInvalidParamError, PyViewerError);

impl From<ViewerError> for PyErr {
    fn from(err: ViewerError) -> PyErr {
        match err {
            ViewerError::Generator(e) => convert_generator_error(e),
            ViewerError::Catalog(e) => convert_catalog_error(e),
            ViewerError::PyO3(e) => e,
            ViewerError::InvalidParam(s) => PyInvalidParamError::new_err(s),
            ViewerError::InfrastructureError(s) => PyViewerError::new_err(s),
            other => PyViewerError::new_err(other.to_string()),
        }
    }
}

pub fn register_py_exceptions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PyViewerError", PyViewerError::type_object(m.py()))?;
    m.add("PyInvalidParamError", PyInvalidParamError::type_object(m.py()))?;
    register_generator_errors(m)?;
    register_catalog_errors(m)?;
    Ok(())
}
