mod config;
mod generator;
mod trajectory;

pub use config::{ObvConfig, ObvFlow, OBV_DEFAULT_LENGTH};
pub use generator::ObvGenerator;
pub use trajectory::obv_trajectory;
