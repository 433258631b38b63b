use pyo3::{create_exception, exceptions::PyException, prelude::*, PyTypeInfo};

use super::error::CatalogError;

create_exception!(pyo3_concept_chart.errors, PyCatalogError, PyException);
create_exception!(pyo3_concept_chart.errors, PyCatalogIoError, PyCatalogError);
create_exception!(
    pyo3_concept_chart.errors,
    PyCatalogMalformedError,
    PyCatalogError
);

pub fn convert_catalog_error(e: CatalogError) -> PyErr {
    let message = e.to_string();
    match e {
        CatalogError::Read { .. } | CatalogError::Write { .. } => {
            PyCatalogIoError::new_err(message)
        }
        CatalogError::Malformed(_) => PyCatalogMalformedError::new_err(message),
        CatalogError::ModuleNotFound(_) => PyCatalogError::new_err(message),
    }
}

pub fn register_py_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PyCatalogError", PyCatalogError::type_object(m.py()))?;
    m.add("PyCatalogIoError", PyCatalogIoError::type_object(m.py()))?;
    m.add(
        "PyCatalogMalformedError",
        PyCatalogMalformedError::type_object(m.py()),
    )?;
    Ok(())
}
