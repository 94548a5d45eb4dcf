//! Prediction request/response models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use energy_core::constants::{InputRange, INPUT_RANGES};
use energy_core::{Comparison, PredictionRecord, RawInput};

/// Body of the "Predict" action. Ranges mirror `constants::INPUT_RANGES`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictRequest {
    /// Defaults to today
    pub date: Option<NaiveDate>,

    #[validate(range(min = -10.0, max = 45.0))]
    pub avg_temp: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub precipitation: f64,

    #[validate(range(min = 0.0, max = 120.0))]
    pub wind_speed: f64,

    #[validate(range(min = 0.0, max = 50.0))]
    pub kitchen_load: f64,

    #[validate(range(min = 0.0, max = 50.0))]
    pub laundry_load: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub water_ac_load: f64,
}

impl PredictRequest {
    pub fn into_raw(self, today: NaiveDate) -> RawInput {
        RawInput {
            date: self.date.unwrap_or(today),
            avg_temp: self.avg_temp,
            precipitation: self.precipitation,
            wind_speed: self.wind_speed,
            kitchen_load: self.kitchen_load,
            laundry_load: self.laundry_load,
            water_ac_load: self.water_ac_load,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FormSchema {
    pub date_default: NaiveDate,
    pub fields: Vec<InputRange>,
}

impl FormSchema {
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            date_default: today,
            fields: INPUT_RANGES.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub records: Vec<PredictionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl HistoryResponse {
    pub fn new(records: Vec<PredictionRecord>) -> Self {
        let message = records.is_empty().then_some("No predictions yet.");
        Self {
            count: records.len(),
            records,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: Comparison,
    pub records: Vec<PredictionRecord>,
}
