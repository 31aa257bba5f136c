use std::collections::HashSet;

use crate::core::location::extract_region_and_postal;
use crate::models::{EventRecord, Locality, ScoreBreakdown, ScoringWeights, VolunteerProfile};

/// Score one (volunteer, event) pair
///
/// Scoring formula:
/// score = (
///     overlapping_skills * skill +   # exact, case-sensitive tag match
///     availability                   # volunteer free on the event's calendar day
///     postal | region                # postal match suppresses the region check
/// )
///
/// Reasons are appended in evaluation order, one per positive contribution.
pub fn calculate_match_score(
    volunteer: &VolunteerProfile,
    event: &EventRecord,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut score = 0;
    let mut reasons = Vec::new();

    // Skills
    let overlap = shared_skills(volunteer, event);
    if !overlap.is_empty() {
        score = (overlap.len() as u32).saturating_mul(weights.skill);
        reasons.push(format!(
            "Skill match (+{} each): {}",
            weights.skill,
            overlap.join(", ")
        ));
    }

    // Availability
    let availability_match = is_available(volunteer, event);
    if availability_match {
        score = score.saturating_add(weights.availability);
        reasons.push(format!(
            "Available on {} (+{})",
            event.day().format("%Y-%m-%d"),
            weights.availability
        ));
    }

    // Locality
    let locality = locality_of(volunteer, &event.location);
    match locality {
        Locality::Postal => {
            score = score.saturating_add(weights.postal);
            reasons.push(format!(
                "Exact postal code match {} (+{})",
                volunteer.zipcode, weights.postal
            ));
        }
        Locality::Region => {
            score = score.saturating_add(weights.region);
            reasons.push(format!(
                "Same state {} (+{})",
                volunteer.state, weights.region
            ));
        }
        Locality::None => {}
    }

    ScoreBreakdown {
        score,
        reasons,
        skill_overlap: overlap.len(),
        availability_match,
        locality,
    }
}

/// Skills held by the volunteer and required by the event, in the
/// volunteer's own order
pub fn shared_skills<'a>(volunteer: &'a VolunteerProfile, event: &EventRecord) -> Vec<&'a str> {
    let required: HashSet<&str> = event.required_skills.iter().map(String::as_str).collect();

    volunteer
        .skills
        .iter()
        .map(String::as_str)
        .filter(|skill| required.contains(skill))
        .collect()
}

#[inline]
fn is_available(volunteer: &VolunteerProfile, event: &EventRecord) -> bool {
    volunteer.availability.contains(&event.day())
}

/// Locality tier between a volunteer's address and an event's free-text location
#[inline]
fn locality_of(volunteer: &VolunteerProfile, location: &str) -> Locality {
    let parsed = extract_region_and_postal(location);

    if parsed.postal.as_deref() == Some(volunteer.zipcode.as_str()) {
        Locality::Postal
    } else if parsed.region.as_deref() == Some(volunteer.state.as_str()) {
        Locality::Region
    } else {
        Locality::None
    }
}
