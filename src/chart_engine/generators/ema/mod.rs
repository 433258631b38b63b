mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{EmaConfig, EmaShape, EMA_DEFAULT_LENGTH};
pub use expr::ema_expr;
pub use generator::EmaGenerator;
pub use trajectory::ema_trajectory;
