//! Published event shapes.
//!
//! Transport is out of scope, but the payload shapes are a contract with
//! downstream consumers (publishing workers, regeneration prompts). Field
//! names here are wire names.

use serde::{Deserialize, Serialize};

use crate::scoring::{Issue, ScoreStatus};

/// Event type for [`ApprovedForPublishing`].
pub const EVENT_APPROVED_FOR_PUBLISHING: &str = "article.approved_for_publishing";

/// Event type for [`GenerateRequest`].
pub const EVENT_GENERATE_REQUEST: &str = "article.generate.request";

/// An article cleared the gate and may publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedForPublishing {
    pub article_id: String,
    pub score: u32,
    /// Always [`ScoreStatus::Approved`]; carried explicitly for consumers
    /// that do not re-derive status from the score.
    pub status: ScoreStatus,
}

/// A targeted regeneration request for an article that failed the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub article_id: String,
    /// Diagnosed issues, in canonical order.
    pub correction_reason: Vec<Issue>,
    /// Remediation sentences matching `correction_reason` one-to-one.
    pub correction_instructions: Vec<String>,
    /// The attempt number this regeneration will be scored as.
    pub correction_attempt: u32,
}

/// One fire-and-forget gate event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GateEvent {
    ApprovedForPublishing(ApprovedForPublishing),
    GenerateRequest(GenerateRequest),
}

impl GateEvent {
    /// The bus routing key for this event.
    pub fn event_type(&self) -> &'static str {
        match self {
            GateEvent::ApprovedForPublishing(_) => EVENT_APPROVED_FOR_PUBLISHING,
            GateEvent::GenerateRequest(_) => EVENT_GENERATE_REQUEST,
        }
    }

    /// The JSON payload published alongside [`GateEvent::event_type`].
    pub fn payload(&self) -> serde_json::Value {
        match self {
            GateEvent::ApprovedForPublishing(p) => {
                serde_json::to_value(p).expect("plain struct serializes")
            }
            GateEvent::GenerateRequest(p) => {
                serde_json::to_value(p).expect("plain struct serializes")
            }
        }
    }
}

impl std::fmt::Display for GateEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_type())
    }
}
