//! Scoring output types.

use serde::{Deserialize, Serialize};

use crate::analysis::SignalValue;
use crate::constants::{APPROVED_THRESHOLD, REVIEW_THRESHOLD};

/// Publishing status derived from a 0–100 score.
///
/// The thresholds are fixed policy: ≥80 approved, 60–79 needs review,
/// below 60 needs correction. The corrector relies on exactly this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Approved,
    NeedsReview,
    NeedsCorrection,
}

impl ScoreStatus {
    /// Maps a score to its status band.
    pub fn from_score(score: u32) -> Self {
        if score >= APPROVED_THRESHOLD {
            ScoreStatus::Approved
        } else if score >= REVIEW_THRESHOLD {
            ScoreStatus::NeedsReview
        } else {
            ScoreStatus::NeedsCorrection
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::Approved => "approved",
            ScoreStatus::NeedsReview => "needs_review",
            ScoreStatus::NeedsCorrection => "needs_correction",
        }
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        matches!(self, ScoreStatus::Approved)
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted signal's contribution to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    /// Signal name as it appears in the weight table.
    pub signal: String,
    /// Observed value; `None` when the table names a signal the set lacks
    /// (such entries fail but their weight stays active).
    pub value: Option<SignalValue>,
    pub weight: u32,
    pub passed: bool,
    /// `weight` if passed, else 0.
    pub points: u32,
}

/// Full scoring output for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `round(total_points / max_points × 100)`; 0 when no weights are active.
    pub score: u32,
    pub total_points: u64,
    pub max_points: u64,
    /// Per-signal contributions in reporting order.
    pub breakdown: Vec<SignalBreakdown>,
    pub status: ScoreStatus,
}

impl ScoreResult {
    /// Signals that failed, in breakdown order.
    pub fn failing_signals(&self) -> impl Iterator<Item = &str> {
        self.breakdown
            .iter()
            .filter(|b| !b.passed)
            .map(|b| b.signal.as_str())
    }
}
