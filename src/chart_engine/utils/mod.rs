pub mod field_names;
pub mod rayon_parallel;
#[cfg(test)]
pub mod test_helpers;

pub use field_names::FieldName;
pub use rayon_parallel::process_in_single_thread;
