//! Consumption Level Thresholds
//!
//! Bands a predicted value (kW) into Low / Medium / High. Each band is closed
//! at its lower bound: 50.0 is Medium, 90.0 is High.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionLevel {
    Low,
    Medium,
    High,
}

impl ConsumptionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConsumptionLevel::Low => "Low",
            ConsumptionLevel::Medium => "Medium",
            ConsumptionLevel::High => "High",
        }
    }

    /// Traffic-light glyph shown next to the label
    pub fn indicator(&self) -> &'static str {
        match self {
            ConsumptionLevel::Low => "🟢",
            ConsumptionLevel::Medium => "🟡",
            ConsumptionLevel::High => "🔴",
        }
    }
}

impl std::fmt::Display for ConsumptionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Values at or above this are at least Medium
    pub medium_from: f64,

    /// Values at or above this are High
    pub high_from: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            medium_from: 50.0,
            high_from: 90.0,
        }
    }
}

impl ThresholdConfig {
    pub fn classify(&self, value: f64) -> ConsumptionLevel {
        if value < self.medium_from {
            ConsumptionLevel::Low
        } else if value < self.high_from {
            ConsumptionLevel::Medium
        } else {
            ConsumptionLevel::High
        }
    }
}

/// Classify with the default thresholds
pub fn classify(value: f64) -> ConsumptionLevel {
    ThresholdConfig::default().classify(value)
}
