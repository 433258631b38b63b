mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{MacdConfig, MacdShape, MACD_DEFAULT_LENGTH};
pub use expr::{hist_expr, signal_expr};
pub use generator::MacdGenerator;
pub use trajectory::macd_trajectory;
