//! Prediction Record - one row of the session history

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::features::RawInput;
use crate::logic::model::ConsumptionLevel;

/// Round to 2 decimals (display precision of predictions)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Immutable record of a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub avg_temp: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub kitchen_load: f64,
    pub laundry_load: f64,
    pub water_ac_load: f64,
    /// Model output rounded to 2 decimals (kW)
    pub predicted_kw: f64,
    pub level: ConsumptionLevel,
    /// 🟢 / 🟡 / 🔴 shown next to the level
    pub level_indicator: String,
}

impl PredictionRecord {
    /// `level` is expected to come from the unrounded prediction
    pub fn new(raw: &RawInput, prediction: f64, level: ConsumptionLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            date: raw.date,
            avg_temp: raw.avg_temp,
            precipitation: raw.precipitation,
            wind_speed: raw.wind_speed,
            kitchen_load: raw.kitchen_load,
            laundry_load: raw.laundry_load,
            water_ac_load: raw.water_ac_load,
            predicted_kw: round2(prediction),
            level,
            level_indicator: level.indicator().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(-3.333), -3.33);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn test_record_keeps_input() {
        let raw = RawInput::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let record = PredictionRecord::new(&raw, 42.4242, ConsumptionLevel::Low);

        assert_eq!(record.date, raw.date);
        assert_eq!(record.avg_temp, raw.avg_temp);
        assert_eq!(record.water_ac_load, raw.water_ac_load);
        assert_eq!(record.predicted_kw, 42.42);
        assert_eq!(record.level, ConsumptionLevel::Low);
    }

    #[test]
    fn test_record_ids_unique() {
        let raw = RawInput::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let a = PredictionRecord::new(&raw, 1.0, ConsumptionLevel::Low);
        let b = PredictionRecord::new(&raw, 1.0, ConsumptionLevel::Low);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_serializes_date() {
        let raw = RawInput::with_defaults(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        let record = PredictionRecord::new(&raw, 60.0, ConsumptionLevel::Medium);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["date"], "2024-07-15");
        assert_eq!(json["level"], "Medium");
        assert_eq!(json["level_indicator"], "🟡");
        assert_eq!(json["predicted_kw"], 60.0);
    }
}
