//! Pure weighted scoring over a [`SignalSet`].

use tracing::debug;

use crate::analysis::SignalSet;
use crate::constants::DEFAULT_MIN_WORD_COUNT;

use super::issues::Issue;
use super::types::{ScoreResult, ScoreStatus, SignalBreakdown};
use super::weights::{CHECKLIST, WeightTable};

/// Converts a [`SignalSet`] into a 0–100 score, status, issues and
/// suggestions under a fixed [`WeightTable`].
///
/// The table is read-only after construction, so a scorer is safe to share
/// across threads; swapping in learned weights means constructing a new
/// scorer, never mutating this one.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: WeightTable,
    min_word_count: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// A scorer over the canonical default table.
    pub fn new() -> Self {
        Self::with_weights(WeightTable::default())
    }

    /// A scorer over an explicit table (e.g. a learned one).
    pub fn with_weights(weights: WeightTable) -> Self {
        Self {
            weights,
            min_word_count: DEFAULT_MIN_WORD_COUNT,
        }
    }

    /// A scorer over the default table with workspace overrides merged in.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self::with_weights(WeightTable::with_overrides(overrides))
    }

    /// Overrides the word-count floor used by the defensive issue check.
    pub fn with_min_word_count(mut self, min_word_count: usize) -> Self {
        self.min_word_count = min_word_count;
        self
    }

    /// The active weight table.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// The 0–100 score alone.
    pub fn score(&self, signals: &SignalSet) -> u32 {
        let (total, max) = self.points(signals);
        ratio_score(total, max)
    }

    /// Score plus the full per-signal breakdown and derived status.
    pub fn detailed_score(&self, signals: &SignalSet) -> ScoreResult {
        let mut breakdown = Vec::with_capacity(self.weights.len());
        let mut total_points = 0u64;
        let mut max_points = 0u64;

        for (signal, weight) in self.weights.iter_ordered() {
            let value = signals.value(signal);
            let passed = value.is_some_and(|v| v.is_passing());
            let points = if passed { weight } else { 0 };
            total_points += points as u64;
            max_points += weight as u64;
            breakdown.push(SignalBreakdown {
                signal: signal.to_string(),
                value,
                weight,
                passed,
                points,
            });
        }

        let score = ratio_score(total_points, max_points);
        let status = ScoreStatus::from_score(score);

        debug!(score, total_points, max_points, %status, "document scored");

        ScoreResult {
            score,
            total_points,
            max_points,
            breakdown,
            status,
        }
    }

    /// Failing canonical checklist entries, in canonical order, deduplicated.
    ///
    /// A trailing `low_word_count` is added defensively whenever the raw word
    /// count sits below the recommended minimum, even if the adequacy boolean
    /// disagrees with it.
    pub fn identify_issues(&self, signals: &SignalSet) -> Vec<Issue> {
        let mut issues: Vec<Issue> = CHECKLIST
            .iter()
            .filter(|entry| {
                !signals
                    .value(entry.signal)
                    .is_some_and(|v| v.is_passing())
            })
            .map(|entry| entry.issue)
            .collect();

        if signals.word_count < self.min_word_count && !issues.contains(&Issue::LowWordCount) {
            issues.push(Issue::LowWordCount);
        }

        issues
    }

    /// Remediation sentences for `issues`, in the same order.
    pub fn correction_suggestions(&self, issues: &[Issue]) -> Vec<String> {
        issues.iter().map(|i| i.suggestion().to_string()).collect()
    }

    fn points(&self, signals: &SignalSet) -> (u64, u64) {
        let mut total = 0u64;
        let mut max = 0u64;
        for (signal, weight) in self.weights.iter_ordered() {
            max += weight as u64;
            if signals.value(signal).is_some_and(|v| v.is_passing()) {
                total += weight as u64;
            }
        }
        (total, max)
    }
}

/// `round(total / max × 100)`, with an empty table scoring 0.
fn ratio_score(total_points: u64, max_points: u64) -> u32 {
    if max_points == 0 {
        return 0;
    }
    (total_points as f64 / max_points as f64 * 100.0).round() as u32
}
