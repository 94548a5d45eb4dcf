//! Model metadata sidecar
//!
//! ONNX graphs exported from the training pipeline carry no column names, so
//! the exporter writes `<model>.json` next to the model:
//!
//! ```json
//! {
//!   "model_name": "energy_model",
//!   "model_type": "random_forest",
//!   "feature_names_in": ["Year", "Month", "..."],
//!   "sha256": "optional hex digest of the model file"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::StartupError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default)]
    pub model_type: Option<String>,
    /// Ordered input columns the model was fitted on
    pub feature_names_in: Vec<String>,
    #[serde(default)]
    pub sha256: Option<String>,
}

fn default_model_name() -> String {
    "energy_model".to_string()
}

impl ModelMetadata {
    /// Load metadata from JSON file
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let content = std::fs::read_to_string(path).map_err(|source| StartupError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let metadata: ModelMetadata =
            serde_json::from_str(&content).map_err(|e| StartupError::InvalidMetadata {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if metadata.feature_names_in.is_empty() {
            return Err(StartupError::InvalidMetadata {
                path: path.display().to_string(),
                reason: "feature_names_in is empty".to_string(),
            });
        }

        log::info!(
            "Model metadata loaded from: {} ({} features)",
            path.display(),
            metadata.feature_names_in.len()
        );
        Ok(metadata)
    }
}

// ============================================================================
// CHECKSUM
// ============================================================================

/// SHA-256 of the given bytes, lowercase hex
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Verify model bytes against an expected digest (case-insensitive hex)
pub fn verify_checksum(path: &Path, bytes: &[u8], expected: &str) -> Result<(), StartupError> {
    let actual = sha256_hex(bytes);

    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(StartupError::ChecksumMismatch {
            path: path.display().to_string(),
            expected: expected.to_string(),
            actual,
        });
    }

    log::info!("Model checksum verified: {}", &actual[..12]);
    Ok(())
}
