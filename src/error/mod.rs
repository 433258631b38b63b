mod catalog_error;
mod generator_error;
#[cfg(feature = "python")]
pub mod py_interface;
mod viewer_error;

pub use catalog_error::CatalogError;
pub use generator_error::GeneratorError;
pub use viewer_error::ViewerError;
