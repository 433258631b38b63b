mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{VolBreakout, VolConfig, VOL_DEFAULT_LENGTH};
pub use expr::vol_expr;
pub use generator::VolGenerator;
pub use trajectory::vol_trajectory;
