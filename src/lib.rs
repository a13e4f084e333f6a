//! Rankgate library crate (used by pipeline services and integration tests).
//!
//! An automated content-quality gate for SEO content pipelines: it inspects
//! generated markup, computes a weighted SEO score, decides whether content
//! may publish, and — when it may not — drives a bounded feedback loop that
//! requests targeted regeneration with diagnosed issues. A second subsystem
//! periodically retrains the scoring weights from historical ranking
//! outcomes.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Engine configuration
//! - [`SignalSet`], [`SignalValue`] - Extraction results
//! - [`ScoreResult`], [`ScoreStatus`], [`WeightTable`], [`Issue`] - Scoring
//! - [`CorrectionOutcome`], [`CorrectionSession`] - Gate decisions
//!
//! ## Engine Components
//! - [`ContentAnalyzer`] - Feature extraction
//! - [`Scorer`] - Weighted scoring, issues and suggestions
//! - [`Corrector`] - Approve / correct / escalate policy
//! - [`WeightLearner`] - Weight adaptation from ranking history
//!
//! ## Collaborator Seams
//! - [`EventPublisher`] - Best-effort event publishing (message bus)
//! - [`PerformanceHistory`] - Historical (signals, ranking) pairs
//! - [`WeightStore`] - Persistence sink for learned weights
//!
//! ## Constants
//! Status thresholds and the canonical checklist are exported for consistency
//! across modules; see [`constants`] and [`scoring::CHECKLIST`].
//!
//! ## Test/Mock Support
//! Mock collaborators are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod correction;
pub mod events;
pub mod learning;
pub mod scoring;

pub use analysis::{ContentAnalyzer, SignalSet, SignalValue};

pub use config::{Config, ConfigError};

pub use constants::{
    APPROVED_THRESHOLD, DEFAULT_MAX_CORRECTION_ATTEMPTS, DEFAULT_MIN_WORD_COUNT,
    DEFAULT_RANKING_THRESHOLD, KEYWORD_DENSITY_MAX, KEYWORD_DENSITY_MIN, MIN_TRAINING_SAMPLES,
    REVIEW_THRESHOLD,
};

pub use correction::{CorrectionOutcome, CorrectionSession, Corrector};

pub use events::{
    ApprovedForPublishing, EVENT_APPROVED_FOR_PUBLISHING, EVENT_GENERATE_REQUEST, EventPublisher,
    GateEvent, GenerateRequest, NoopEventPublisher, PublishError,
};
#[cfg(any(test, feature = "mock"))]
pub use events::{FailingEventPublisher, MockEventPublisher, RecordedEvent};

#[cfg(any(test, feature = "mock"))]
pub use learning::{MockPerformanceHistory, MockWeightStore};
pub use learning::{
    BinaryClassifier, LearningError, LogisticRegression, OutcomeClass, PerformanceHistory,
    StandardScaler, TrainedModel, TrainingOutcome, TrainingSample, TrainingSummary, WeightLearner,
    WeightStore,
};

pub use scoring::{
    CHECKLIST, ChecklistEntry, InvalidWeight, Issue, ScoreResult, ScoreStatus, Scorer,
    SignalBreakdown, UnknownIssue, WeightTable, suggestion_for,
};
