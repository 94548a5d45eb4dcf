//! Features Module - Feature derivation
//!
//! Maps one form submission onto the fixed column layout the energy model was
//! trained on. `layout.rs` owns the column list; everything else follows it.

pub mod builder;
pub mod input;
pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use builder::build_features;
pub use input::RawInput;
pub use layout::{validate_schema, LayoutInfo, SchemaMismatch, FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
