//! Prediction Session
//!
//! One interactive session: the validated predictor it was handed plus the
//! history it owns. Callers keep the session (one per user context); nothing
//! here is process-global.
//!
//! Flow per "Predict": RawInput → features → model → level → record → log.

use serde::{Deserialize, Serialize};

use crate::logic::features::{build_features, RawInput};
use crate::logic::history::{Comparison, HistoryError, PredictionLog, PredictionRecord};
use crate::logic::model::{InferenceError, Predictor, ThresholdConfig};

/// One labelled bar/slice of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    fn new(label: &str, value: f64) -> Self {
        Self { label: label.to_string(), value }
    }
}

/// Result of a "Predict" action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub record: PredictionRecord,
    /// Raw inputs: Temp, Wind, Kitchen, Laundry, Water
    pub input_overview: Vec<ChartPoint>,
    /// Share of each sub-metering group in percent (1 decimal)
    pub energy_distribution: Vec<ChartPoint>,
}

fn input_overview(raw: &RawInput) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Temp", raw.avg_temp),
        ChartPoint::new("Wind", raw.wind_speed),
        ChartPoint::new("Kitchen", raw.kitchen_load),
        ChartPoint::new("Laundry", raw.laundry_load),
        ChartPoint::new("Water", raw.water_ac_load),
    ]
}

fn energy_distribution(raw: &RawInput) -> Vec<ChartPoint> {
    let total = raw.total_load();
    let share = |part: f64| {
        if total > 0.0 {
            (part / total * 1000.0).round() / 10.0
        } else {
            0.0
        }
    };

    vec![
        ChartPoint::new("Kitchen", share(raw.kitchen_load)),
        ChartPoint::new("Laundry", share(raw.laundry_load)),
        ChartPoint::new("Water/AC", share(raw.water_ac_load)),
    ]
}

pub struct PredictionSession {
    predictor: Predictor,
    thresholds: ThresholdConfig,
    log: PredictionLog,
}

impl PredictionSession {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            thresholds: ThresholdConfig::default(),
            log: PredictionLog::new(),
        }
    }

    /// "Predict": score the input and record it. Nothing is recorded on error.
    pub fn predict(&mut self, raw: &RawInput) -> Result<PredictionOutcome, InferenceError> {
        let features = build_features(raw);
        log::debug!("Features: {}", features.to_log_entry());

        let prediction = self.predictor.predict(&features)?;
        let level = self.thresholds.classify(prediction);

        let record = PredictionRecord::new(raw, prediction, level);
        log::info!(
            "Prediction #{} for {}: {:.2} kW ({})",
            self.log.len() + 1,
            raw.date,
            record.predicted_kw,
            level
        );
        self.log.append(record.clone());

        Ok(PredictionOutcome {
            record,
            input_overview: input_overview(raw),
            energy_distribution: energy_distribution(raw),
        })
    }

    /// "Show previous predictions"
    pub fn history(&self) -> &[PredictionRecord] {
        self.log.all()
    }

    /// "Compare with previous"
    pub fn compare(&self) -> Result<Comparison, HistoryError> {
        let comparison = self.log.compare();
        if let Err(e) = &comparison {
            log::warn!("Comparison unavailable: {}", e);
        }
        comparison
    }

    pub fn log(&self) -> &PredictionLog {
        &self.log
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::logic::model::testing::LinearModel;
    use crate::logic::model::ConsumptionLevel;

    fn session(model: LinearModel) -> PredictionSession {
        PredictionSession::new(Predictor::new(Arc::new(model)).unwrap())
    }

    fn input(kitchen: f64, laundry: f64, water: f64) -> RawInput {
        RawInput {
            kitchen_load: kitchen,
            laundry_load: laundry,
            water_ac_load: water,
            ..RawInput::with_defaults(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        }
    }

    #[test]
    fn test_predict_records_outcome() {
        let mut s = session(LinearModel::total_load());
        let outcome = s.predict(&input(2.0, 2.0, 20.0)).unwrap();

        assert_eq!(outcome.record.predicted_kw, 24.0);
        assert_eq!(outcome.record.level, ConsumptionLevel::Low);
        assert_eq!(s.history(), &[outcome.record.clone()]);
    }

    #[test]
    fn test_level_uses_unrounded_value() {
        let mut s = session(LinearModel::constant(49.996));
        let outcome = s.predict(&input(1.0, 1.0, 1.0)).unwrap();

        assert_eq!(outcome.record.predicted_kw, 50.0);
        assert_eq!(outcome.record.level, ConsumptionLevel::Low);
    }

    #[test]
    fn test_chart_data() {
        let mut s = session(LinearModel::total_load());
        let outcome = s.predict(&input(2.0, 2.0, 20.0)).unwrap();

        let labels: Vec<&str> = outcome.input_overview.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Temp", "Wind", "Kitchen", "Laundry", "Water"]);

        let shares: Vec<f64> = outcome.energy_distribution.iter().map(|p| p.value).collect();
        assert_eq!(shares, vec![8.3, 8.3, 83.3]);
    }

    #[test]
    fn test_distribution_zero_load() {
        let shares: Vec<f64> = energy_distribution(&input(0.0, 0.0, 0.0))
            .into_iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(shares, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_failed_prediction_not_recorded() {
        let mut s = session(LinearModel::constant(f64::INFINITY));
        assert!(s.predict(&input(1.0, 1.0, 1.0)).is_err());
        assert!(s.log().is_empty());
    }

    #[test]
    fn test_end_to_end_compare() {
        let mut s = session(LinearModel::total_load());
        assert!(s.compare().is_err());

        let first = s.predict(&input(10.0, 10.0, 10.0)).unwrap().record;
        assert_eq!(
            s.compare().unwrap_err(),
            HistoryError::InsufficientHistory { available: 1 }
        );

        let second = s.predict(&input(20.0, 20.0, 20.0)).unwrap().record;
        let third = s.predict(&input(40.0, 30.0, 30.0)).unwrap().record;

        let comparison = s.compare().unwrap();
        assert_eq!(comparison.previous, second);
        assert_eq!(comparison.current, third);
        assert_eq!(comparison.current.level, ConsumptionLevel::High);
        assert_eq!(s.history(), &[first, second, third]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let predictor = Predictor::new(Arc::new(LinearModel::total_load())).unwrap();
        let mut a = PredictionSession::new(predictor.clone());
        let b = PredictionSession::new(predictor);

        a.predict(&input(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
    }
}
