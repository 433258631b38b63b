pub mod error;
#[cfg(feature = "python")]
pub mod py_interface;

pub use error::GeneratorError;
