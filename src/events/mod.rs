//! Typed gate events and the best-effort publisher collaborator.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


pub use error::PublishError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{FailingEventPublisher, MockEventPublisher, RecordedEvent};
pub use types::{
    ApprovedForPublishing, EVENT_APPROVED_FOR_PUBLISHING, EVENT_GENERATE_REQUEST, GateEvent,
    GenerateRequest,
};

use async_trait::async_trait;
use tracing::debug;

/// Message-bus seam: the engine only needs a `publish` capability.
///
/// Implementations are best-effort. Callers inside the engine never let a
/// publish failure change a decision — see the corrector.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        event: &GateEvent,
        workspace_id: Option<&str>,
    ) -> Result<(), PublishError>;
}

/// Publisher for deployments without a bus: logs and discards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventPublisher;

#[async_trait]
impl EventPublisher for NoopEventPublisher {
    async fn publish(
        &self,
        event: &GateEvent,
        workspace_id: Option<&str>,
    ) -> Result<(), PublishError> {
        debug!(event_type = event.event_type(), ?workspace_id, "event discarded (no bus)");
        Ok(())
    }
}
