pub mod dispatcher;
pub mod generators;
#[cfg(feature = "python")]
pub mod module_registry;
pub mod plan;
pub mod renderer;
pub mod top_level_api;
pub mod utils;

pub use top_level_api::{
    build_chart, build_gallery, gallery_pairs, generate_samples, render_chapter,
    toggle_completion,
};
