//! Volunteer Match - volunteer/event matching and ranking service
//!
//! Scores every eligible (volunteer, event) pair with an explainable weighted
//! sum and ranks the results either per event or across the whole system.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, Exclusions, calculate_match_score, extract_region_and_postal};
pub use models::{VolunteerProfile, EventRecord, PairingRecord, VolunteerMatch, PairMatch, ScoringWeights};
pub use services::{MatchingService, MatchStore, MatchError, InMemoryStore};
