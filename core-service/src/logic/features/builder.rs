//! Feature Builder - RawInput → FeatureVector
//!
//! Pure and deterministic. Values are emitted in `FEATURE_LAYOUT` order; the
//! trailing comment on each line names the column it fills.

use chrono::Datelike;

use super::input::RawInput;
use super::vector::FeatureVector;

/// Fixed weather/grid readings the form does not ask for
pub const WIND_DIRECTION: f64 = 180.0;
pub const PRESSURE: f64 = 1013.0;
pub const VOLTAGE: f64 = 230.0;
pub const GLOBAL_REACTIVE_POWER: f64 = 0.1;

/// Spread applied around tavg for tmin/tmax
pub const TEMP_SPREAD: f64 = 3.0;

/// Decay applied to the total load for the 60-step lag
pub const LAG_60_FACTOR: f64 = 0.95;

const SUMMER_MONTHS: [u32; 3] = [6, 7, 8];
const WINTER_MONTHS: [u32; 3] = [12, 1, 2];

fn flag(set: bool) -> f64 {
    if set { 1.0 } else { 0.0 }
}

/// Derive the model's feature vector from one form submission
pub fn build_features(raw: &RawInput) -> FeatureVector {
    let month = raw.date.month();
    let tavg = raw.avg_temp;
    let total = raw.total_load();

    FeatureVector::from_values([
        raw.date.year() as f64,               // Year
        month as f64,                         // Month
        raw.date.day() as f64,                // Day
        flag(SUMMER_MONTHS.contains(&month)), // Is_Summer
        flag(WINTER_MONTHS.contains(&month)), // Is_Winter
        tavg,                                 // tavg
        tavg - TEMP_SPREAD,                   // tmin
        tavg + TEMP_SPREAD,                   // tmax
        raw.precipitation,                    // prcp
        raw.wind_speed,                       // wspd
        WIND_DIRECTION,                       // wdir
        PRESSURE,                             // pres
        raw.kitchen_load,                     // Sub_metering_1
        raw.laundry_load,                     // Sub_metering_2
        raw.water_ac_load,                    // Sub_metering_3
        VOLTAGE,                              // Voltage
        total,                                // Global_intensity
        GLOBAL_REACTIVE_POWER,                // Global_reactive_power
        total,                                // Lag_1
        LAG_60_FACTOR * total,                // Lag_60
        tavg * total,                         // Temp_ActivePower
    ])
}
