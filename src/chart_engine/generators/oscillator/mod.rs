mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{OscillatorConfig, StrengthPath, OSCILLATOR_DEFAULT_LENGTH};
pub use expr::oscillator_exprs;
pub use generator::OscillatorGenerator;
pub use trajectory::oscillator_trajectory;
