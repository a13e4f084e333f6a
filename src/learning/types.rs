//! Training inputs, outcomes and the learned model state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::SignalSet;
use crate::scoring::WeightTable;

use super::classifier::StandardScaler;

/// One historical outcome: the signals a document shipped with and the
/// average ranking position it went on to achieve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub signals: SignalSet,
    /// Observed average position; lower is better. Non-finite or
    /// non-positive positions mark the sample as incomplete.
    pub avg_position: f64,
}

impl TrainingSample {
    pub fn new(signals: SignalSet, avg_position: f64) -> Self {
        Self {
            signals,
            avg_position,
        }
    }

    /// A sample is usable when its observed position is a real ranking.
    pub fn is_valid(&self) -> bool {
        self.avg_position.is_finite() && self.avg_position > 0.0
    }

    /// Binary outcome under `ranking_threshold`: positions strictly below it
    /// are good.
    pub fn outcome(&self, ranking_threshold: f64) -> OutcomeClass {
        if self.avg_position < ranking_threshold {
            OutcomeClass::Good
        } else {
            OutcomeClass::Poor
        }
    }
}

/// The two ranking outcome classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    Good,
    Poor,
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeClass::Good => f.write_str("good"),
            OutcomeClass::Poor => f.write_str("poor"),
        }
    }
}

/// Learned classifier state, replaced wholesale on each successful retrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Feature order used for both training and prediction.
    pub feature_names: Vec<String>,
    pub scaler: StandardScaler,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Weight table derived from the coefficients.
    pub weights: WeightTable,
    /// Cross-validated accuracy estimate, 0–1.
    pub accuracy: f64,
    pub samples_used: usize,
    pub trained_at: DateTime<Utc>,
}

/// Operator-facing summary of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub accuracy: f64,
    pub samples_used: usize,
    pub good_outcomes: usize,
    pub poor_outcomes: usize,
    pub weights: WeightTable,
}

/// Result of one training run. Guard failures are data, not errors: a
/// periodic retrain loop matches on this without any exception handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TrainingOutcome {
    /// Training succeeded and the learner's model was replaced.
    Trained(TrainingSummary),

    /// Fewer raw samples than required.
    InsufficientData { required: usize, actual: usize },

    /// Enough raw samples, but too few survived validity filtering.
    InsufficientValidData { required: usize, actual: usize },

    /// Every valid sample shares one outcome class; nothing to separate.
    SingleClassData { class: OutcomeClass },
}

impl TrainingOutcome {
    #[inline]
    pub fn is_trained(&self) -> bool {
        matches!(self, TrainingOutcome::Trained(_))
    }
}
