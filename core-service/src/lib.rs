//! Smart Home Energy Prediction - Core
//!
//! Turns household and weather readings into the feature vector the
//! externally trained energy model expects, scores it, bands the result into
//! a consumption level and keeps a per-session history of predictions.
//!
//! ## Layout
//! - `logic::features` - raw form input, feature layout, feature builder
//! - `logic::model` - model boundary (ONNX backend), predictor, classifier
//! - `logic::history` - append-only prediction log
//! - `logic::session` - caller-owned session composing all of the above

pub mod constants;
pub mod logic;

pub use logic::features::{
    build_features, FeatureVector, LayoutInfo, RawInput, FEATURE_COUNT, FEATURE_LAYOUT,
};
pub use logic::history::{Comparison, HistoryError, PredictionLog, PredictionRecord};
pub use logic::model::{
    classify, ConsumptionLevel, EnergyModel, InferenceError, ModelInfo, OnnxModel, Predictor,
    StartupError, ThresholdConfig,
};
pub use logic::session::{ChartPoint, PredictionOutcome, PredictionSession};
