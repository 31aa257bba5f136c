use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Volunteer profile snapshot as read from the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerProfile {
    #[serde(rename = "volunteerId")]
    pub volunteer_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub city: String,
    /// Two-letter region code, e.g. "TX"
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub availability: Vec<NaiveDate>,
}

/// Event definition as read from the event store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    /// Free text, e.g. "George R. Brown Convention Center, Houston, TX 77010"
    pub location: String,
    /// Local wall-clock time of the event; no timezone conversion is applied
    #[serde(rename = "eventDate")]
    pub event_date: NaiveDateTime,
    #[serde(default)]
    pub urgency: Urgency,
}

impl EventRecord {
    /// Calendar day the event takes place on
    pub fn day(&self) -> NaiveDate {
        self.event_date.date()
    }
}

/// Informational urgency classification; never used in scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Stored association between a volunteer and an event
///
/// Any record, whatever its status, marks the pair as already handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    #[serde(rename = "volunteerId")]
    pub volunteer_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub status: PairingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Locality tier reached by a pair; ordering follows contribution magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Locality {
    #[default]
    None,
    Region,
    Postal,
}

/// Result of scoring one (volunteer, event) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub reasons: Vec<String>,
    pub skill_overlap: usize,
    pub availability_match: bool,
    pub locality: Locality,
}

/// A ranked volunteer for a single event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerMatch {
    pub volunteer: VolunteerProfile,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// A ranked (volunteer, event) pair from the global view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairMatch {
    pub volunteer: VolunteerProfile,
    pub event: EventRecord,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Scoring weights
///
/// Each contribution is additive; postal and region are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Points per overlapping skill
    pub skill: u32,
    pub availability: u32,
    pub postal: u32,
    pub region: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 5,
            availability: 3,
            postal: 2,
            region: 1,
        }
    }
}
