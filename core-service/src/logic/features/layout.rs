//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The energy model was trained on exactly these columns, in exactly this
//! order. The model's declared inputs are checked against this table once at
//! startup.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Calendar (0-4) ===
    "Year",                  // 0
    "Month",                 // 1
    "Day",                   // 2
    "Is_Summer",             // 3: Month in {6,7,8}
    "Is_Winter",             // 4: Month in {12,1,2}

    // === Weather (5-11) ===
    "tavg",                  // 5: Average temperature
    "tmin",                  // 6: tavg - 3
    "tmax",                  // 7: tavg + 3
    "prcp",                  // 8: Precipitation
    "wspd",                  // 9: Wind speed
    "wdir",                  // 10: Constant 180.0
    "pres",                  // 11: Constant 1013.0

    // === Sub-metering (12-14) ===
    "Sub_metering_1",        // 12: Kitchen
    "Sub_metering_2",        // 13: Laundry
    "Sub_metering_3",        // 14: Water heater / AC

    // === Grid (15-17) ===
    "Voltage",               // 15: Constant 230.0
    "Global_intensity",      // 16: Total load
    "Global_reactive_power", // 17: Constant 0.1

    // === Lags / Interactions (18-20) ===
    "Lag_1",                 // 18: Total load
    "Lag_60",                // 19: 0.95 * total load
    "Temp_ActivePower",      // 20: tavg * total load
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 21;

const _: () = assert!(FEATURE_LAYOUT.len() == FEATURE_COUNT);

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of an ordered list of feature names
pub fn compute_hash<S: AsRef<str>>(version: u8, names: &[S]) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[version]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Hash of the current layout
pub fn layout_hash() -> u32 {
    compute_hash(FEATURE_VERSION, FEATURE_LAYOUT)
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// SCHEMA VALIDATION
// ============================================================================

/// Declared model inputs differ from the feature layout
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMismatch {
    /// Layout features the model does not declare
    pub missing: Vec<String>,
    /// Declared inputs the layout does not produce
    pub unexpected: Vec<String>,
    /// First position where both lists disagree: (index, expected, declared)
    pub first_divergence: Option<(usize, String, String)>,
    pub expected_hash: u32,
    pub declared_hash: u32,
}

impl std::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature schema mismatch: expected v{} (hash: {:08x}), model declares hash {:08x}",
            FEATURE_VERSION, self.expected_hash, self.declared_hash
        )?;
        if !self.missing.is_empty() {
            write!(f, "; missing: [{}]", self.missing.join(", "))?;
        }
        if !self.unexpected.is_empty() {
            write!(f, "; unexpected: [{}]", self.unexpected.join(", "))?;
        }
        if let Some((index, expected, declared)) = &self.first_divergence {
            write!(f, "; position {}: expected '{}', declared '{}'", index, expected, declared)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaMismatch {}

/// Validate that a model's declared inputs are exactly the feature layout
pub fn validate_schema<S: AsRef<str>>(declared: &[S]) -> Result<(), SchemaMismatch> {
    let declared: Vec<&str> = declared.iter().map(|s| s.as_ref()).collect();

    if declared.as_slice() == FEATURE_LAYOUT {
        return Ok(());
    }

    let missing = FEATURE_LAYOUT
        .iter()
        .filter(|name| !declared.contains(name))
        .map(|name| name.to_string())
        .collect();

    let unexpected = declared
        .iter()
        .filter(|name| !FEATURE_LAYOUT.contains(name))
        .map(|name| name.to_string())
        .collect();

    let first_divergence = FEATURE_LAYOUT
        .iter()
        .zip(declared.iter())
        .enumerate()
        .find(|(_, (expected, got))| expected != got)
        .map(|(i, (expected, got))| (i, expected.to_string(), got.to_string()));

    Err(SchemaMismatch {
        missing,
        unexpected,
        first_divergence,
        expected_hash: layout_hash(),
        declared_hash: compute_hash(FEATURE_VERSION, &declared),
    })
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// TESTS
// ============================================================================
