//! In-memory models for tests

use crate::logic::features::{FeatureVector, FEATURE_LAYOUT};
use super::error::InferenceError;
use super::inference::EnergyModel;

pub(crate) fn layout_names() -> Vec<String> {
    FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
}

/// `bias + Σ weight * feature` over named features
pub(crate) struct LinearModel {
    schema: Vec<String>,
    weights: Vec<(&'static str, f64)>,
    bias: f64,
}

impl LinearModel {
    pub(crate) fn new(weights: Vec<(&'static str, f64)>, bias: f64) -> Self {
        Self { schema: layout_names(), weights, bias }
    }

    /// Predicts the Global_intensity column as-is
    pub(crate) fn total_load() -> Self {
        Self::new(vec![("Global_intensity", 1.0)], 0.0)
    }

    pub(crate) fn constant(value: f64) -> Self {
        Self::new(Vec::new(), value)
    }

    pub(crate) fn with_schema(schema: Vec<String>) -> Self {
        Self { schema, ..Self::total_load() }
    }
}

impl EnergyModel for LinearModel {
    fn name(&self) -> &str {
        "linear"
    }

    fn feature_names_in(&self) -> &[String] {
        &self.schema
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        self.weights.iter().try_fold(self.bias, |acc, (name, weight)| {
            features
                .get_by_name(name)
                .map(|value| acc + weight * value)
                .ok_or_else(|| InferenceError(format!("unknown feature {}", name)))
        })
    }
}
