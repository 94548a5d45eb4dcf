//! Central Configuration Constants
//!
//! Single source of truth for defaults shared by the core and the server.

/// App name
pub const APP_NAME: &str = "Smart Home Energy Prediction";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the trained model
pub const DEFAULT_MODEL_PATH: &str = "models/energy_model.onnx";

/// Suffix appended to the model path to find its metadata sidecar
pub const METADATA_SUFFIX: &str = ".json";

// ============================================
// Form input ranges (enforced at the UI boundary)
// ============================================

/// Range and default of one numeric form field
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct InputRange {
    pub field: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const AVG_TEMP_RANGE: InputRange = InputRange {
    field: "avg_temp",
    label: "Avg Temperature",
    unit: "°C",
    min: -10.0,
    max: 45.0,
    default: 20.0,
};

pub const PRECIPITATION_RANGE: InputRange = InputRange {
    field: "precipitation",
    label: "Precipitation",
    unit: "mm",
    min: 0.0,
    max: 100.0,
    default: 10.0,
};

pub const WIND_SPEED_RANGE: InputRange = InputRange {
    field: "wind_speed",
    label: "Wind Speed",
    unit: "km/h",
    min: 0.0,
    max: 120.0,
    default: 10.0,
};

pub const KITCHEN_LOAD_RANGE: InputRange = InputRange {
    field: "kitchen_load",
    label: "Kitchen",
    unit: "kWh",
    min: 0.0,
    max: 50.0,
    default: 2.0,
};

pub const LAUNDRY_LOAD_RANGE: InputRange = InputRange {
    field: "laundry_load",
    label: "Laundry",
    unit: "kWh",
    min: 0.0,
    max: 50.0,
    default: 2.0,
};

pub const WATER_AC_LOAD_RANGE: InputRange = InputRange {
    field: "water_ac_load",
    label: "Water / AC",
    unit: "kWh",
    min: 0.0,
    max: 100.0,
    default: 20.0,
};

/// All numeric form fields in display order
pub const INPUT_RANGES: [InputRange; 6] = [
    AVG_TEMP_RANGE,
    PRECIPITATION_RANGE,
    WIND_SPEED_RANGE,
    KITCHEN_LOAD_RANGE,
    LAUNDRY_LOAD_RANGE,
    WATER_AC_LOAD_RANGE,
];

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get metadata sidecar path from environment, or derive it from the model path
pub fn get_metadata_path(model_path: &str) -> String {
    std::env::var("MODEL_METADATA_PATH")
        .unwrap_or_else(|_| format!("{}{}", model_path, METADATA_SUFFIX))
}
