use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank volunteers for one event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to rank the best pairs across all events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalMatchesRequest {
    #[serde(default)]
    pub limit: Option<u16>,
}
