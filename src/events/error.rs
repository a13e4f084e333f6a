//! Event publishing error types.

use thiserror::Error;

/// Errors surfaced by an [`crate::events::EventPublisher`] implementation.
///
/// These never propagate out of a correction decision: the corrector catches
/// and logs them, because a notification outage must not block or alter the
/// gate's verdict.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The transport could not be reached.
    #[error("event transport unavailable: {reason}")]
    TransportUnavailable { reason: String },

    /// The transport refused the event.
    #[error("event rejected by transport: {reason}")]
    Rejected { reason: String },
}
