mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{BollConfig, BollMode, BOLL_DEFAULT_LENGTH};
pub use expr::boll_exprs;
pub use generator::BollGenerator;
pub use trajectory::boll_trajectory;
