mod config;
mod generator;
mod trajectory;

pub use config::{SuperTrendConfig, SUPERTREND_DEFAULT_LENGTH};
pub use generator::SuperTrendGenerator;
pub use trajectory::supertrend_trajectory;
