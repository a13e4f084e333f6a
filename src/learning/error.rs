//! Learning collaborator error types.

use thiserror::Error;

/// Errors from the external history and persistence collaborators.
///
/// Training guard failures are *not* here — those are
/// [`crate::learning::TrainingOutcome`] variants.
#[derive(Debug, Error)]
pub enum LearningError {
    /// The historical-performance source could not deliver samples.
    #[error("failed to fetch historical samples for workspace '{workspace_id}': {reason}")]
    FetchFailed {
        workspace_id: String,
        reason: String,
    },

    /// The learned weights could not be persisted.
    #[error("failed to persist learned weights for workspace '{workspace_id}': {reason}")]
    PersistFailed {
        workspace_id: String,
        reason: String,
    },
}
