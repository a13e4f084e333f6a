//! Recording and failing publishers for tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::PublishError;
use super::types::GateEvent;
use super::EventPublisher;

/// Records every published event instead of sending it anywhere.
#[derive(Debug, Default)]
pub struct MockEventPublisher {
    events: Mutex<Vec<RecordedEvent>>,
}

/// One event captured by [`MockEventPublisher`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub workspace_id: Option<String>,
    pub event: GateEvent,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, in order.
    pub fn recorded(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    /// Number of events published so far.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(
        &self,
        event: &GateEvent,
        workspace_id: Option<&str>,
    ) -> Result<(), PublishError> {
        self.events.lock().push(RecordedEvent {
            workspace_id: workspace_id.map(str::to_string),
            event: event.clone(),
        });
        Ok(())
    }
}

/// Fails every publish, for exercising the swallow-and-log path.
#[derive(Debug, Default)]
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(
        &self,
        _event: &GateEvent,
        _workspace_id: Option<&str>,
    ) -> Result<(), PublishError> {
        Err(PublishError::TransportUnavailable {
            reason: "mock outage".to_string(),
        })
    }
}
