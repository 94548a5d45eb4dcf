//! Predictor - validated wrapper around the injected model
//!
//! Construction is the guarded startup step: the model's declared inputs must
//! be exactly `FEATURE_LAYOUT`, otherwise the model would score garbage.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::{validate_schema, FeatureVector, LayoutInfo};
use super::error::{InferenceError, StartupError};
use super::inference::EnergyModel;

#[derive(Default)]
struct LatencyStats {
    sum_us: AtomicU64,
    count: AtomicU64,
}

/// Model status for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_type: Option<String>,
    pub source: String,
    pub loaded_at: Option<DateTime<Utc>>,
    pub feature_names_in: Vec<String>,
    pub layout: LayoutInfo,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn EnergyModel>,
    stats: Arc<LatencyStats>,
}

impl Predictor {
    /// Wrap a loaded model after checking its declared schema
    pub fn new(model: Arc<dyn EnergyModel>) -> Result<Self, StartupError> {
        if let Err(mismatch) = validate_schema(model.feature_names_in()) {
            log::error!("Model '{}' rejected: {}", model.name(), mismatch);
            return Err(mismatch.into());
        }

        log::info!(
            "Model '{}' accepted: {} features, layout hash {:08x}",
            model.name(),
            model.feature_names_in().len(),
            LayoutInfo::current().hash
        );

        Ok(Self {
            model,
            stats: Arc::new(LatencyStats::default()),
        })
    }

    /// Score one feature vector (kW)
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let start = Instant::now();

        let value = self.model.predict(features)?;
        if !value.is_finite() {
            return Err(InferenceError(format!("Model returned non-finite value: {}", value)));
        }

        let elapsed_us = start.elapsed().as_micros() as u64;
        self.stats.sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
        self.stats.count.fetch_add(1, Ordering::Relaxed);

        log::debug!("Prediction {:.4} kW in {}us", value, elapsed_us);
        Ok(value)
    }

    pub fn info(&self) -> ModelInfo {
        let sum = self.stats.sum_us.load(Ordering::Relaxed);
        let count = self.stats.count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        ModelInfo {
            model_name: self.model.name().to_string(),
            model_type: self.model.model_type().map(str::to_string),
            source: self.model.source(),
            loaded_at: self.model.loaded_at(),
            feature_names_in: self.model.feature_names_in().to_vec(),
            layout: LayoutInfo::current(),
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{build_features, RawInput, FEATURE_LAYOUT};
    use crate::logic::model::testing::{layout_names, LinearModel};
    use chrono::NaiveDate;

    fn sample() -> FeatureVector {
        build_features(&RawInput::with_defaults(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()))
    }

    #[test]
    fn test_accepts_matching_schema() {
        let predictor = Predictor::new(Arc::new(LinearModel::total_load())).unwrap();
        let info = predictor.info();

        assert_eq!(info.feature_names_in, FEATURE_LAYOUT);
        assert_eq!(info.inference_count, 0);
    }

    #[test]
    fn test_rejects_missing_feature() {
        let names: Vec<String> = layout_names().into_iter().filter(|n| n != "Voltage").collect();
        let err = Predictor::new(Arc::new(LinearModel::with_schema(names))).err().unwrap();

        match err {
            StartupError::Schema(mismatch) => assert_eq!(mismatch.missing, vec!["Voltage"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_reordered_schema() {
        let mut names = layout_names();
        names.swap(0, 2);
        let err = Predictor::new(Arc::new(LinearModel::with_schema(names))).err().unwrap();

        assert!(matches!(err, StartupError::Schema(_)));
    }

    #[test]
    fn test_predict_delegates_and_counts() {
        let predictor = Predictor::new(Arc::new(LinearModel::total_load())).unwrap();

        let value = predictor.predict(&sample()).unwrap();
        assert!((value - 24.0).abs() < 1e-9);
        assert_eq!(predictor.info().inference_count, 1);
    }

    #[test]
    fn test_predict_rejects_non_finite() {
        let predictor = Predictor::new(Arc::new(LinearModel::constant(f64::NAN))).unwrap();

        assert!(predictor.predict(&sample()).is_err());
        assert_eq!(predictor.info().inference_count, 0);
    }
}
