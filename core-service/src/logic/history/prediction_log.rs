//! Prediction Log - append-only, session-scoped history
//!
//! Owned by one session and dropped with it. No capacity limit: a session
//! only ever holds what one user clicked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::{round2, PredictionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("At least two predictions are required (have {available}).")]
    InsufficientHistory { available: usize },
}

/// Last two predictions side by side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub previous: PredictionRecord,
    pub current: PredictionRecord,
    /// current - previous (kW)
    pub delta_kw: f64,
    /// Relative change in percent; None when the previous value is zero
    pub percent_change: Option<f64>,
}

impl Comparison {
    fn between(previous: &PredictionRecord, current: &PredictionRecord) -> Self {
        let delta = current.predicted_kw - previous.predicted_kw;
        let percent_change = if previous.predicted_kw != 0.0 {
            Some(round2(delta / previous.predicted_kw.abs() * 100.0))
        } else {
            None
        };

        Self {
            previous: previous.clone(),
            current: current.clone(),
            delta_kw: round2(delta),
            percent_change,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PredictionLog {
    records: Vec<PredictionRecord>,
}

impl PredictionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PredictionRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn all(&self) -> &[PredictionRecord] {
        &self.records
    }

    /// (previous, current) when at least two records exist
    pub fn last_two(&self) -> Option<(&PredictionRecord, &PredictionRecord)> {
        match self.records.as_slice() {
            [.., previous, current] => Some((previous, current)),
            _ => None,
        }
    }

    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn compare(&self) -> Result<Comparison, HistoryError> {
        self.last_two()
            .map(|(previous, current)| Comparison::between(previous, current))
            .ok_or(HistoryError::InsufficientHistory { available: self.len() })
    }
}
