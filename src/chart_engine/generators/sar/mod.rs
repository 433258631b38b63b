mod config;
mod generator;
mod trajectory;

pub use config::{SarConfig, SAR_DEFAULT_LENGTH};
pub use generator::SarGenerator;
pub use trajectory::sar_trajectory;
