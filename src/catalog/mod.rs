mod catalog;
mod navigation;
mod progress;

pub use catalog::Catalog;
pub use progress::{CompletionState, ProgressStore};
