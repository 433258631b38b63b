use super::catalog_error::CatalogError;
use super::generator_error::GeneratorError;
use polars::prelude::PolarsError;
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[cfg(feature = "python")]
    #[error("PyO3 error: {0}")]
    PyO3(#[from] PyErr),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}
