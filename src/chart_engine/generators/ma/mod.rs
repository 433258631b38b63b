mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{MaConfig, MaShape, MA_DEFAULT_LENGTH};
pub use expr::ma_exprs;
pub use generator::MaGenerator;
pub use trajectory::ma_trajectory;
