//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values (e.g. the review band) from primary ones to avoid drift.
//!
//! # Threshold Invariants
//!
//! The status thresholds are fixed policy shared across modules (scoring, correction).
//! The Scorer and the Corrector must agree on them exactly: a score the Scorer labels
//! `approved` is a score the Corrector publishes. Runtime-tunable knobs (word-count
//! minimum, attempt cap, internal domain) live in [`crate::config::Config`] instead.

/// Scores at or above this are `approved`.
pub const APPROVED_THRESHOLD: u32 = 80;

/// Scores in `[REVIEW_THRESHOLD, APPROVED_THRESHOLD)` are `needs_review`;
/// anything lower is `needs_correction`.
pub const REVIEW_THRESHOLD: u32 = 60;

/// Correction cycles allowed per article before human escalation.
pub const DEFAULT_MAX_CORRECTION_ATTEMPTS: u32 = 3;

/// Minimum visible-body word count considered adequate.
pub const DEFAULT_MIN_WORD_COUNT: usize = 300;

/// Inclusive keyword-density band considered healthy, in percent.
pub const KEYWORD_DENSITY_MIN: f64 = 0.5;
pub const KEYWORD_DENSITY_MAX: f64 = 3.0;

/// Minimum historical samples (raw and valid) required to train.
pub const MIN_TRAINING_SAMPLES: usize = 10;

/// Average ranking position below which an outcome counts as "good".
pub const DEFAULT_RANKING_THRESHOLD: f64 = 10.0;

/// Learned weights are normalized to approximately this sum.
pub const TARGET_WEIGHT_SUM: u32 = 100;

/// Every learned weight is floored to this value.
pub const MIN_SIGNAL_WEIGHT: u32 = 1;
