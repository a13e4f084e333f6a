//! Correction decision types.

use serde::{Deserialize, Serialize};

use crate::scoring::Issue;

/// Caller-owned attempt cursor for one article.
///
/// The engine is stateless across calls: the session travels with the caller,
/// and the attempt carried in a [`CorrectionOutcome::CorrectionRequested`] is
/// *advisory* — two concurrent decisions for the same article can both derive
/// the same next attempt. Callers that need exactly-once increments must
/// serialize decisions per article (e.g. a single-writer queue keyed by
/// `article_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSession {
    pub article_id: String,
    /// Completed correction cycles so far. `0` for a first evaluation.
    pub attempt: u32,
}

impl CorrectionSession {
    /// A fresh session for an article's first evaluation.
    pub fn new(article_id: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            attempt: 0,
        }
    }

    /// Resumes a session at a known attempt count.
    pub fn resumed(article_id: impl Into<String>, attempt: u32) -> Self {
        Self {
            article_id: article_id.into(),
            attempt,
        }
    }

    /// The session to carry into the next cycle after a requested correction.
    pub fn next(&self) -> Self {
        Self {
            article_id: self.article_id.clone(),
            attempt: self.attempt + 1,
        }
    }
}

/// Verdict of one pass through the gate. All variants are terminal for the
/// call; `CorrectionRequested` is expected to lead to a fresh evaluation once
/// external regeneration completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CorrectionOutcome {
    /// Score cleared the approval threshold; the approval event was emitted.
    Approved { score: u32 },

    /// Regeneration was requested with the diagnosed issues; `attempt` is the
    /// (advisory) number the regenerated article will be scored as.
    CorrectionRequested {
        score: u32,
        attempt: u32,
        issues: Vec<Issue>,
        instructions: Vec<String>,
    },

    /// The attempt budget is exhausted; a human takes over. No event.
    ManualReviewRequired { score: u32, attempt: u32 },

    /// Below approval yet nothing actionable was diagnosed. No event.
    NoIssuesFound { score: u32 },
}

impl CorrectionOutcome {
    /// Stable action name for the external correction API.
    pub fn action(&self) -> &'static str {
        match self {
            CorrectionOutcome::Approved { .. } => "approved",
            CorrectionOutcome::CorrectionRequested { .. } => "correction_requested",
            CorrectionOutcome::ManualReviewRequired { .. } => "manual_review_required",
            CorrectionOutcome::NoIssuesFound { .. } => "no_issues_found",
        }
    }

    /// Human-readable summary for API responses and logs.
    pub fn message(&self) -> String {
        match self {
            CorrectionOutcome::Approved { score } => {
                format!("Article approved for publishing with score {}", score)
            }
            CorrectionOutcome::CorrectionRequested {
                score,
                attempt,
                issues,
                ..
            } => format!(
                "Correction attempt {} requested at score {} ({} issue(s))",
                attempt,
                score,
                issues.len()
            ),
            CorrectionOutcome::ManualReviewRequired { score, attempt } => format!(
                "Manual review required: {} correction attempt(s) exhausted at score {}",
                attempt, score
            ),
            CorrectionOutcome::NoIssuesFound { score } => format!(
                "Score {} is below approval but no actionable issues were found",
                score
            ),
        }
    }
}
