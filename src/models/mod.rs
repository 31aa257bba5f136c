// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    EventRecord, Locality, PairMatch, PairingRecord, PairingStatus, ScoreBreakdown, ScoringWeights,
    Urgency, VolunteerMatch, VolunteerProfile,
};
pub use requests::{EventMatchesRequest, GlobalMatchesRequest};
pub use responses::{ErrorResponse, EventMatchesResponse, GlobalMatchesResponse, HealthResponse};
