use serde::{Deserialize, Serialize};
use crate::models::domain::{PairMatch, VolunteerMatch};

/// Response for the per-event ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub matches: Vec<VolunteerMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
}

/// Response for the global ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub pairs: Vec<PairMatch>,
    #[serde(rename = "pairsConsidered")]
    pub pairs_considered: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
