mod config;
mod expr;
mod generator;
mod trajectory;

pub use config::{AvlConfig, AVL_DEFAULT_LENGTH};
pub use expr::avl_expr;
pub use generator::AvlGenerator;
pub use trajectory::avl_trajectory;
