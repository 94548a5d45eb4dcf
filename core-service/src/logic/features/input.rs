//! Raw form input
//!
//! One submission of the household & weather form. Ranges are the UI's
//! business (see `constants::INPUT_RANGES`); the core accepts any finite value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AVG_TEMP_RANGE, KITCHEN_LOAD_RANGE, LAUNDRY_LOAD_RANGE, PRECIPITATION_RANGE,
    WATER_AC_LOAD_RANGE, WIND_SPEED_RANGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub date: NaiveDate,
    /// °C
    pub avg_temp: f64,
    /// mm
    pub precipitation: f64,
    /// km/h
    pub wind_speed: f64,
    /// kWh
    pub kitchen_load: f64,
    /// kWh
    pub laundry_load: f64,
    /// kWh
    pub water_ac_load: f64,
}

impl RawInput {
    /// Form defaults for the given date
    pub fn with_defaults(date: NaiveDate) -> Self {
        Self {
            date,
            avg_temp: AVG_TEMP_RANGE.default,
            precipitation: PRECIPITATION_RANGE.default,
            wind_speed: WIND_SPEED_RANGE.default,
            kitchen_load: KITCHEN_LOAD_RANGE.default,
            laundry_load: LAUNDRY_LOAD_RANGE.default,
            water_ac_load: WATER_AC_LOAD_RANGE.default,
        }
    }

    /// Combined sub-metering load (kitchen + laundry + water/AC)
    pub fn total_load(&self) -> f64 {
        self.kitchen_load + self.laundry_load + self.water_ac_load
    }
}
