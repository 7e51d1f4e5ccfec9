//! File Classifier
//!
//! Per-file inference (category, display name, sort key) and the batch
//! grouping built on top of it. Everything here is a pure function of its
//! input and the catalog it is handed.

pub mod classify;
pub mod display_name;
pub mod grouping;
pub mod sort_key;

pub use classify::classify;
pub use display_name::generate_display_name;
pub use grouping::{CategoryGroup, GroupedFiles, classify_and_group, classify_file};
pub use sort_key::{first_number, sort_key};
