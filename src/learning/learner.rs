//! Weight learning from historical ranking outcomes.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::analysis::SignalSet;
use crate::config::Config;
use crate::constants::{
    MIN_SIGNAL_WEIGHT, MIN_TRAINING_SAMPLES, TARGET_WEIGHT_SUM,
};
use crate::scoring::{CHECKLIST, Scorer, WeightTable};

use super::classifier::{BinaryClassifier, LogisticRegression, StandardScaler};
use super::error::LearningError;
use super::history::{PerformanceHistory, WeightStore};
use super::types::{
    OutcomeClass, TrainedModel, TrainingOutcome, TrainingSample, TrainingSummary,
};

const CV_FOLDS: usize = 5;

/// Derives a new [`WeightTable`] and a ranking-probability predictor from
/// historical outcomes.
///
/// The only mutable state is the last-trained-model slot, which is replaced
/// wholesale on success and untouched on every guard failure. Training is
/// CPU-bound (cost ∝ samples × features) and meant for an out-of-band
/// periodic job, never the request path.
#[derive(Debug)]
pub struct WeightLearner {
    ranking_threshold: f64,
    min_samples: usize,
    model: RwLock<Option<TrainedModel>>,
}

impl WeightLearner {
    /// A learner using the configured ranking threshold.
    pub fn new(config: &Config) -> Self {
        Self {
            ranking_threshold: config.ranking_threshold,
            min_samples: MIN_TRAINING_SAMPLES,
            model: RwLock::new(None),
        }
    }

    /// Trains on `samples` with the configured threshold.
    pub fn train(&self, samples: &[TrainingSample]) -> TrainingOutcome {
        self.train_with_threshold(samples, self.ranking_threshold)
    }

    /// Trains on `samples`, labelling positions strictly below
    /// `ranking_threshold` as good outcomes.
    ///
    /// Guards run in order and each failure leaves the current model (and any
    /// externally persisted weights) untouched.
    pub fn train_with_threshold(
        &self,
        samples: &[TrainingSample],
        ranking_threshold: f64,
    ) -> TrainingOutcome {
        if samples.len() < self.min_samples {
            return TrainingOutcome::InsufficientData {
                required: self.min_samples,
                actual: samples.len(),
            };
        }

        let valid: Vec<&TrainingSample> = samples.iter().filter(|s| s.is_valid()).collect();
        if valid.len() < self.min_samples {
            return TrainingOutcome::InsufficientValidData {
                required: self.min_samples,
                actual: valid.len(),
            };
        }

        let labels: Vec<f64> = valid
            .iter()
            .map(|s| match s.outcome(ranking_threshold) {
                OutcomeClass::Good => 1.0,
                OutcomeClass::Poor => 0.0,
            })
            .collect();
        let good_outcomes = labels.iter().filter(|&&l| l == 1.0).count();
        let poor_outcomes = labels.len() - good_outcomes;

        if good_outcomes == 0 || poor_outcomes == 0 {
            return TrainingOutcome::SingleClassData {
                class: if poor_outcomes == 0 {
                    OutcomeClass::Good
                } else {
                    OutcomeClass::Poor
                },
            };
        }

        let rows: Vec<Vec<f64>> = valid.iter().map(|s| feature_vector(&s.signals)).collect();
        let (scaler, scaled) = StandardScaler::fit_transform(&rows);

        let sample_weights = balanced_weights(&labels)
            .expect("both classes present after the single-class guard");

        let accuracy = cross_validated_accuracy(&scaled, &labels);

        let mut classifier = LogisticRegression::new();
        classifier.fit(&scaled, &labels, &sample_weights);

        let weights = derive_weights(classifier.coefficients());

        debug!(
            coefficients = ?classifier.coefficients(),
            intercept = classifier.intercept(),
            "classifier fitted"
        );

        let summary = TrainingSummary {
            accuracy,
            samples_used: valid.len(),
            good_outcomes,
            poor_outcomes,
            weights: weights.clone(),
        };

        let model = TrainedModel {
            feature_names: CHECKLIST.iter().map(|e| e.signal.to_string()).collect(),
            scaler,
            coefficients: classifier.coefficients().to_vec(),
            intercept: classifier.intercept(),
            weights,
            accuracy,
            samples_used: valid.len(),
            trained_at: Utc::now(),
        };

        info!(
            samples_used = summary.samples_used,
            good_outcomes,
            poor_outcomes,
            accuracy,
            "weight learning succeeded, model replaced"
        );

        *self.model.write() = Some(model);

        TrainingOutcome::Trained(summary)
    }

    /// Probability (0–1) that content with `signals` ranks well, from the
    /// last trained model. `None` until a model has been trained.
    pub fn predict_ranking_probability(&self, signals: &SignalSet) -> Option<f64> {
        let guard = self.model.read();
        let model = guard.as_ref()?;

        let scaled = model.scaler.transform(&feature_vector(signals));
        let classifier =
            LogisticRegression::from_parameters(model.coefficients.clone(), model.intercept);
        Some(classifier.predict_proba(&scaled))
    }

    /// Fetches history, trains, and persists the learned weights — in that
    /// order, and only on success. A fetch failure, guard failure or persist
    /// failure each leave previously persisted weights as they were.
    pub async fn adjust_weights(
        &self,
        workspace_id: &str,
        history: &dyn PerformanceHistory,
        store: &dyn WeightStore,
    ) -> Result<TrainingOutcome, LearningError> {
        let samples = history.fetch_samples(workspace_id).await?;
        let outcome = self.train(&samples);

        match &outcome {
            TrainingOutcome::Trained(summary) => {
                store.apply_weights(workspace_id, &summary.weights).await?;
                info!(workspace_id, "learned weights applied");
            }
            other => {
                info!(workspace_id, outcome = ?other, "training skipped; weights unchanged");
            }
        }

        Ok(outcome)
    }

    /// A scorer over the last learned table, or the defaults if untrained.
    pub fn scorer_with_learned_weights(&self) -> Scorer {
        match self.model.read().as_ref() {
            Some(model) => Scorer::with_weights(model.weights.clone()),
            None => Scorer::new(),
        }
    }

    /// Snapshot of the last trained model, if any.
    pub fn trained_model(&self) -> Option<TrainedModel> {
        self.model.read().clone()
    }
}

/// Fixed-order numeric features: 1.0/0.0 per canonical checklist signal.
fn feature_vector(signals: &SignalSet) -> Vec<f64> {
    CHECKLIST
        .iter()
        .map(|entry| {
            if signals.value(entry.signal).is_some_and(|v| v.is_passing()) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Class-balanced sample weights: each class contributes half the total mass.
/// `None` when a class is absent.
fn balanced_weights(labels: &[f64]) -> Option<Vec<f64>> {
    let n = labels.len() as f64;
    let positives = labels.iter().filter(|&&l| l == 1.0).count() as f64;
    let negatives = n - positives;
    if positives == 0.0 || negatives == 0.0 {
        return None;
    }

    let positive_weight = n / (2.0 * positives);
    let negative_weight = n / (2.0 * negatives);
    Some(
        labels
            .iter()
            .map(|&l| if l == 1.0 { positive_weight } else { negative_weight })
            .collect(),
    )
}

/// Deterministic k-fold accuracy estimate (folds by index stride, no
/// shuffling). Folds whose training split collapses to one class are
/// skipped; if every fold collapses, falls back to training-set accuracy.
fn cross_validated_accuracy(rows: &[Vec<f64>], labels: &[f64]) -> f64 {
    let k = CV_FOLDS.min(rows.len());
    let mut fold_accuracies = Vec::with_capacity(k);

    for fold in 0..k {
        let mut train_rows = Vec::new();
        let mut train_labels = Vec::new();
        let mut test_rows = Vec::new();
        let mut test_labels = Vec::new();

        for (i, (row, &label)) in rows.iter().zip(labels).enumerate() {
            if i % k == fold {
                test_rows.push(row.clone());
                test_labels.push(label);
            } else {
                train_rows.push(row.clone());
                train_labels.push(label);
            }
        }

        if test_rows.is_empty() {
            continue;
        }
        let Some(weights) = balanced_weights(&train_labels) else {
            continue;
        };

        let mut classifier = LogisticRegression::new();
        classifier.fit(&train_rows, &train_labels, &weights);
        fold_accuracies.push(accuracy_of(&classifier, &test_rows, &test_labels));
    }

    if fold_accuracies.is_empty() {
        let weights = balanced_weights(labels).unwrap_or_else(|| vec![1.0; labels.len()]);
        let mut classifier = LogisticRegression::new();
        classifier.fit(rows, labels, &weights);
        return accuracy_of(&classifier, rows, labels);
    }

    fold_accuracies.iter().sum::<f64>() / fold_accuracies.len() as f64
}

fn accuracy_of(classifier: &LogisticRegression, rows: &[Vec<f64>], labels: &[f64]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let mut correct = 0;
    for (row, &label) in rows.iter().zip(labels) {
        let predicted_good = classifier.predict_proba(row) >= 0.5;
        if predicted_good == (label >= 0.5) {
            correct += 1;
        }
    }
    correct as f64 / rows.len() as f64
}

/// `|coefficient|` normalized to sum ≈[`TARGET_WEIGHT_SUM`], floored at
/// [`MIN_SIGNAL_WEIGHT`] per signal; equal split if every coefficient is zero.
fn derive_weights(coefficients: &[f64]) -> WeightTable {
    let sum_abs: f64 = coefficients.iter().map(|c| c.abs()).sum();

    let entries = CHECKLIST.iter().zip(coefficients).map(|(entry, &coef)| {
        let weight = if sum_abs < 1e-12 {
            (TARGET_WEIGHT_SUM / CHECKLIST.len() as u32).max(MIN_SIGNAL_WEIGHT)
        } else {
            let scaled = (coef.abs() / sum_abs * TARGET_WEIGHT_SUM as f64).round() as u32;
            scaled.max(MIN_SIGNAL_WEIGHT)
        };
        (entry.signal.to_string(), weight)
    });

    WeightTable::from_entries(entries)
}
