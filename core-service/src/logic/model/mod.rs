//! Model Module - Prediction backend
//!
//! Keeps the externally trained model behind `EnergyModel` so the ONNX
//! backend can be swapped (or stubbed) without touching features or history.

pub mod error;
pub mod inference;
pub mod metadata;
pub mod predictor;
pub mod threshold;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common types
pub use error::{InferenceError, StartupError};
pub use inference::{EnergyModel, OnnxModel};
pub use metadata::ModelMetadata;
pub use predictor::{ModelInfo, Predictor};
pub use threshold::{classify, ConsumptionLevel, ThresholdConfig};
