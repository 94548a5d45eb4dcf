//! History Module - In-memory prediction history

pub mod prediction_log;
pub mod record;

pub use prediction_log::{Comparison, HistoryError, PredictionLog};
pub use record::{round2, PredictionRecord};
