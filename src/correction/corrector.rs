//! The approve / correct / escalate decision policy.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::{ContentAnalyzer, SignalSet};
use crate::config::Config;
use crate::constants::APPROVED_THRESHOLD;
use crate::events::{ApprovedForPublishing, EventPublisher, GateEvent, GenerateRequest};
use crate::scoring::{CHECKLIST, Issue, ScoreResult, ScoreStatus, Scorer};

use super::types::{CorrectionOutcome, CorrectionSession};

/// Stateless decision policy wrapping the scorer.
///
/// Holds no per-article state; everything that varies per call travels in the
/// [`CorrectionSession`]. Emits at most one event per decision, best-effort:
/// a publish failure is logged and never alters the returned outcome.
pub struct Corrector {
    analyzer: ContentAnalyzer,
    scorer: Scorer,
    publisher: Arc<dyn EventPublisher>,
    workspace_id: Option<String>,
    max_attempts: u32,
}

impl std::fmt::Debug for Corrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corrector")
            .field("analyzer", &self.analyzer)
            .field("scorer", &self.scorer)
            .field("workspace_id", &self.workspace_id)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl Corrector {
    /// A corrector over the default weight table.
    pub fn new(config: &Config, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            analyzer: ContentAnalyzer::new(config),
            scorer: Scorer::new().with_min_word_count(config.min_word_count),
            publisher,
            workspace_id: None,
            max_attempts: config.max_correction_attempts,
        }
    }

    /// Swaps in a differently weighted scorer (e.g. learned weights).
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Attributes published events to a workspace.
    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// The scorer this corrector decides with.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Full cycle for callers holding raw markup:
    /// analyze → score → [`Corrector::decide`].
    pub async fn evaluate_and_correct(
        &self,
        session: &CorrectionSession,
        document: &str,
        keywords: &[String],
    ) -> CorrectionOutcome {
        let signals = self.analyzer.analyze(document, keywords);
        self.decide(session, &signals).await
    }

    /// Decides from a signal set, deriving issues via the scorer.
    pub async fn decide(
        &self,
        session: &CorrectionSession,
        signals: &SignalSet,
    ) -> CorrectionOutcome {
        let score = self.scorer.score(signals);
        self.apply_policy(session, score, || self.scorer.identify_issues(signals))
            .await
    }

    /// Decides from an existing [`ScoreResult`], deriving issues from its
    /// breakdown instead of re-running signal checks.
    pub async fn decide_scored(
        &self,
        session: &CorrectionSession,
        result: &ScoreResult,
    ) -> CorrectionOutcome {
        self.apply_policy(session, result.score, || issues_from_breakdown(result))
            .await
    }

    /// The decision policy. Order is load-bearing:
    /// approval beats the attempt budget, the attempt budget beats issues.
    async fn apply_policy<F>(
        &self,
        session: &CorrectionSession,
        score: u32,
        derive_issues: F,
    ) -> CorrectionOutcome
    where
        F: FnOnce() -> Vec<Issue>,
    {
        if score >= APPROVED_THRESHOLD {
            info!(article_id = %session.article_id, score, "article approved for publishing");
            self.emit(GateEvent::ApprovedForPublishing(ApprovedForPublishing {
                article_id: session.article_id.clone(),
                score,
                status: ScoreStatus::Approved,
            }))
            .await;
            return CorrectionOutcome::Approved { score };
        }

        if session.attempt >= self.max_attempts {
            info!(
                article_id = %session.article_id,
                score,
                attempt = session.attempt,
                "correction attempts exhausted, escalating to manual review"
            );
            return CorrectionOutcome::ManualReviewRequired {
                score,
                attempt: session.attempt,
            };
        }

        let issues = derive_issues();
        if issues.is_empty() {
            info!(article_id = %session.article_id, score, "below approval but nothing to correct");
            return CorrectionOutcome::NoIssuesFound { score };
        }

        let instructions = self.scorer.correction_suggestions(&issues);
        let attempt = session.attempt + 1;

        info!(
            article_id = %session.article_id,
            score,
            attempt,
            issue_count = issues.len(),
            "requesting correction"
        );

        self.emit(GateEvent::GenerateRequest(GenerateRequest {
            article_id: session.article_id.clone(),
            correction_reason: issues.clone(),
            correction_instructions: instructions.clone(),
            correction_attempt: attempt,
        }))
        .await;

        CorrectionOutcome::CorrectionRequested {
            score,
            attempt,
            issues,
            instructions,
        }
    }

    /// Best-effort publish: failures are logged, never surfaced.
    async fn emit(&self, event: GateEvent) {
        if let Err(e) = self
            .publisher
            .publish(&event, self.workspace_id.as_deref())
            .await
        {
            warn!(
                error = %e,
                event_type = event.event_type(),
                "event publish failed; decision unaffected"
            );
        }
    }
}

/// Failing canonical entries from a breakdown, in canonical order.
fn issues_from_breakdown(result: &ScoreResult) -> Vec<Issue> {
    let mut issues: Vec<Issue> = result
        .failing_signals()
        .filter_map(|signal| {
            CHECKLIST
                .iter()
                .find(|entry| entry.signal == signal)
                .map(|entry| entry.issue)
        })
        .collect();
    issues.dedup();
    issues
}
