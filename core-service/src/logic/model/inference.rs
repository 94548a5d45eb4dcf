//! Inference Engine - ONNX Runtime Integration
//!
//! The energy model is trained and exported elsewhere. This file defines the
//! boundary the rest of the core talks to (`EnergyModel`) and the ONNX
//! Runtime backend used in production.

use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::tensor::TensorElementType;
use ort::value::{DynValue, Value};

use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::error::{InferenceError, StartupError};
use super::metadata::{verify_checksum, ModelMetadata};

// ============================================================================
// MODEL BOUNDARY
// ============================================================================

/// A trained regression model: declared input columns + single-row scoring
pub trait EnergyModel: Send + Sync {
    fn name(&self) -> &str;

    /// Ordered input columns the model was fitted on
    fn feature_names_in(&self) -> &[String];

    /// Predicted energy (kW) for one feature row
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    fn model_type(&self) -> Option<&str> {
        None
    }

    fn source(&self) -> String {
        "<memory>".to_string()
    }

    fn loaded_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Element type of the model's feature tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputPrecision {
    F32,
    F64,
}

/// The declared input must take one `[1, FEATURE_COUNT]` float or double row.
/// Negative dimensions are dynamic.
fn check_input(
    name: &str,
    element: Option<TensorElementType>,
    dims: Option<&[i64]>,
) -> Result<InputPrecision, StartupError> {
    let incompatible = |reason: String| StartupError::IncompatibleInput {
        name: name.to_string(),
        reason,
    };

    let precision = match element {
        Some(TensorElementType::Float32) => InputPrecision::F32,
        Some(TensorElementType::Float64) => InputPrecision::F64,
        Some(other) => {
            return Err(incompatible(format!("element type {:?}, expected float or double", other)))
        }
        None => return Err(incompatible("not a tensor".to_string())),
    };

    let fits = |dim: i64, wanted: usize| dim < 0 || dim == wanted as i64;
    match dims {
        Some(&[batch, features]) if fits(batch, 1) && fits(features, FEATURE_COUNT) => Ok(precision),
        Some(dims) => Err(incompatible(format!(
            "shape {:?}, expected [1, {}] (dimensions may be dynamic)",
            dims, FEATURE_COUNT
        ))),
        None => Err(incompatible("no tensor shape".to_string())),
    }
}

pub struct OnnxModel {
    session: Mutex<Session>,
    precision: InputPrecision,
    metadata: ModelMetadata,
    model_path: String,
    output_name: String,
    loaded_at: DateTime<Utc>,
}

impl OnnxModel {
    /// Load ONNX model + metadata sidecar. Every failure here is fatal.
    pub fn load(model_path: &Path, metadata_path: &Path) -> Result<Self, StartupError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(StartupError::ModelNotFound(model_path.display().to_string()));
        }

        let metadata = ModelMetadata::load(metadata_path)?;

        let model_bytes = std::fs::read(model_path).map_err(|source| StartupError::Io {
            path: model_path.display().to_string(),
            source,
        })?;

        match metadata.sha256.as_deref() {
            Some(expected) => verify_checksum(model_path, &model_bytes, expected)?,
            None => log::warn!("No sha256 in model metadata, skipping integrity check"),
        }

        let session = Session::builder()
            .map_err(|e| StartupError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| StartupError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(&model_bytes)
            .map_err(|e| StartupError::Runtime(format!("Failed to load model: {}", e)))?;

        if session.inputs.len() != 1 {
            return Err(StartupError::UnsupportedInputs(session.inputs.len()));
        }

        let input = &session.inputs[0];
        let precision = check_input(
            &input.name,
            input.input_type.tensor_type(),
            input.input_type.tensor_shape().map(|shape| &**shape),
        )?;

        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| StartupError::Runtime("No output defined".to_string()))?;

        log::info!(
            "ONNX model loaded successfully ({} bytes, input '{}' {:?}, output '{}')",
            model_bytes.len(),
            session.inputs[0].name,
            precision,
            output_name
        );

        Ok(Self {
            session: Mutex::new(session),
            precision,
            metadata,
            model_path: model_path.display().to_string(),
            output_name,
            loaded_at: Utc::now(),
        })
    }
}

impl EnergyModel for OnnxModel {
    fn name(&self) -> &str {
        &self.metadata.model_name
    }

    fn feature_names_in(&self) -> &[String] {
        &self.metadata.feature_names_in
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let input_tensor: DynValue = match self.precision {
            InputPrecision::F32 => {
                let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_f32())
                    .map_err(|e| InferenceError(format!("Array error: {}", e)))?;
                Value::from_array(input_array)
                    .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?
                    .into_dyn()
            }
            InputPrecision::F64 => {
                let input_array = Array2::<f64>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
                    .map_err(|e| InferenceError(format!("Array error: {}", e)))?;
                Value::from_array(input_array)
                    .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?
                    .into_dyn()
            }
        };

        let mut session = self.session.lock();

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        // Output precision follows the input: float by default, double for double exports
        let value = match output.try_extract_tensor::<f32>() {
            Ok((_, data)) => data.first().map(|&v| v as f64),
            Err(_) => output.try_extract_tensor::<f64>()
                .map_err(|e| InferenceError(format!("Extract error: {}", e)))?
                .1
                .first()
                .copied(),
        };

        value.ok_or_else(|| InferenceError("Empty output tensor".to_string()))
    }

    fn model_type(&self) -> Option<&str> {
        self.metadata.model_type.as_deref()
    }

    fn source(&self) -> String {
        self.model_path.clone()
    }

    fn loaded_at(&self) -> Option<DateTime<Utc>> {
        Some(self.loaded_at)
    }
}
