//! Logic Module - Prediction pipeline
//!
//! - `features/` - Raw input + feature derivation (fixed layout)
//! - `model/` - Model boundary, predictor, consumption classifier
//! - `history/` - Session-scoped prediction log
//! - `session` - Composition of the pipeline per interactive session

pub mod features;
pub mod model;
pub mod history;
pub mod session;
