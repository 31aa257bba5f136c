use std::cmp::Ordering;

use crate::core::{filters::Exclusions, scoring::calculate_match_score};
use crate::models::{EventRecord, PairMatch, ScoreBreakdown, ScoringWeights, VolunteerMatch, VolunteerProfile};

/// Result of ranking volunteers for a single event
#[derive(Debug)]
pub struct EventMatchResult {
    pub matches: Vec<VolunteerMatch>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Result of ranking pairs across all events
#[derive(Debug)]
pub struct GlobalMatchResult {
    pub pairs: Vec<PairMatch>,
    /// Eligible pairs that were scored, before the positive-score filter
    pub pairs_considered: usize,
}

/// Main matching orchestrator over in-memory snapshots
///
/// # Pipeline Stages
/// 1. Exclusion of already-paired (volunteer, event) combinations
/// 2. Scoring
/// 3. Ranking
/// 4. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank every eligible volunteer for one event
    ///
    /// Zero-score volunteers are kept. Ordering is by score only; the sort is
    /// stable so ties keep the input order.
    pub fn rank_for_event(
        &self,
        event: &EventRecord,
        volunteers: Vec<VolunteerProfile>,
        exclusions: &Exclusions,
        limit: usize,
    ) -> EventMatchResult {
        let total_candidates = volunteers.len();

        let mut matches: Vec<VolunteerMatch> = volunteers
            .into_iter()
            // Stage 1: Exclusion
            .filter(|volunteer| exclusions.is_eligible(&volunteer.volunteer_id, &event.event_id))
            // Stage 2: Scoring
            .map(|volunteer| {
                let breakdown = calculate_match_score(&volunteer, event, &self.weights);
                VolunteerMatch {
                    volunteer,
                    score: breakdown.score,
                    reasons: breakdown.reasons,
                }
            })
            .collect();

        let eligible_candidates = matches.len();

        // Stage 3: Ranking
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        // Stage 4: Truncation
        matches.truncate(limit);

        EventMatchResult {
            matches,
            total_candidates,
            eligible_candidates,
        }
    }

    /// Rank the best (volunteer, event) pairs across the whole cross-product
    ///
    /// Only pairs with a positive score are kept. Ties on total score fall
    /// through skill overlap, availability, locality, and finally the
    /// earlier event date.
    pub fn rank_global(
        &self,
        events: &[EventRecord],
        volunteers: &[VolunteerProfile],
        exclusions: &Exclusions,
        limit: usize,
    ) -> GlobalMatchResult {
        let mut pairs_considered = 0;
        let mut ranked: Vec<RankedPair<'_>> = Vec::new();

        for volunteer in volunteers {
            for event in events {
                if !exclusions.is_eligible(&volunteer.volunteer_id, &event.event_id) {
                    continue;
                }
                pairs_considered += 1;

                let breakdown = calculate_match_score(volunteer, event, &self.weights);
                if breakdown.score > 0 {
                    ranked.push(RankedPair {
                        volunteer,
                        event,
                        breakdown,
                    });
                }
            }
        }

        ranked.sort_by(RankedPair::priority);
        ranked.truncate(limit);

        GlobalMatchResult {
            pairs: ranked.into_iter().map(RankedPair::into_match).collect(),
            pairs_considered,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Scored pair kept with its breakdown until ranking is done
struct RankedPair<'a> {
    volunteer: &'a VolunteerProfile,
    event: &'a EventRecord,
    breakdown: ScoreBreakdown,
}

impl RankedPair<'_> {
    fn priority(a: &Self, b: &Self) -> Ordering {
        b.breakdown
            .score
            .cmp(&a.breakdown.score)
            .then_with(|| b.breakdown.skill_overlap.cmp(&a.breakdown.skill_overlap))
            .then_with(|| b.breakdown.availability_match.cmp(&a.breakdown.availability_match))
            .then_with(|| b.breakdown.locality.cmp(&a.breakdown.locality))
            .then_with(|| a.event.event_date.cmp(&b.event.event_date))
    }

    fn into_match(self) -> PairMatch {
        PairMatch {
            volunteer: self.volunteer.clone(),
            event: self.event.clone(),
            score: self.breakdown.score,
            reasons: self.breakdown.reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PairingRecord, PairingStatus, Urgency};
    use chrono::NaiveDate;

    fn create_volunteer(id: &str, skills: &[&str], state: &str, zipcode: &str, dates: &[&str]) -> VolunteerProfile {
        VolunteerProfile {
            volunteer_id: id.to_string(),
            full_name: format!("Volunteer {}", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            city: "Houston".to_string(),
            state: state.to_string(),
            zipcode: zipcode.to_string(),
            availability: dates
                .iter()
                .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
                .collect(),
        }
    }

    fn create_event(id: &str, skills: &[&str], location: &str, date: &str) -> EventRecord {
        EventRecord {
            event_id: id.to_string(),
            event_name: format!("Event {}", id),
            description: None,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            event_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            urgency: Urgency::Medium,
        }
    }

    #[test]
    fn test_rank_for_event_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let event = create_event("e1", &["First Aid", "Logistics"], "Houston, TX 77001", "2030-12-01");

        let volunteers = vec![
            create_volunteer("b", &["First Aid"], "TX", "75001", &[]),
            create_volunteer("a", &["First Aid", "Logistics"], "TX", "77001", &["2030-12-01"]),
        ];

        let result = matcher.rank_for_event(&event, volunteers, &Exclusions::new(), 10);

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].volunteer.volunteer_id, "a");
        assert_eq!(result.matches[0].score, 15);
        assert_eq!(result.matches[1].score, 6);
    }

    #[test]
    fn test_rank_for_event_keeps_zero_scores_and_input_order_on_ties() {
        let matcher = Matcher::with_default_weights();
        let event = create_event("e1", &["First Aid"], "Somewhere", "2030-12-01");

        let volunteers = vec![
            create_volunteer("z1", &[], "CA", "90001", &[]),
            create_volunteer("z2", &[], "CA", "90002", &[]),
            create_volunteer("z3", &[], "CA", "90003", &[]),
        ];

        let result = matcher.rank_for_event(&event, volunteers, &Exclusions::new(), 10);

        let ids: Vec<_> = result.matches.iter().map(|m| m.volunteer.volunteer_id.as_str()).collect();
        assert_eq!(ids, vec!["z1", "z2", "z3"]);
        assert!(result.matches.iter().all(|m| m.score == 0 && m.reasons.is_empty()));
    }

    #[test]
    fn test_rank_for_event_respects_exclusions_and_limit() {
        let matcher = Matcher::with_default_weights();
        let event = create_event("e1", &["First Aid"], "Somewhere", "2030-12-01");
        let exclusions = Exclusions::from_pairings(&[PairingRecord {
            volunteer_id: "v0".to_string(),
            event_id: "e1".to_string(),
            status: PairingStatus::Cancelled,
        }]);

        let volunteers: Vec<VolunteerProfile> = (0..20)
            .map(|i| create_volunteer(&format!("v{}", i), &["First Aid"], "CA", "90001", &[]))
            .collect();

        let result = matcher.rank_for_event(&event, volunteers, &exclusions, 5);

        assert_eq!(result.total_candidates, 20);
        assert_eq!(result.eligible_candidates, 19);
        assert_eq!(result.matches.len(), 5);
        assert!(result.matches.iter().all(|m| m.volunteer.volunteer_id != "v0"));
    }

    #[test]
    fn test_rank_global_drops_zero_scores() {
        let matcher = Matcher::with_default_weights();
        let events = vec![create_event("e1", &["First Aid"], "Somewhere", "2030-12-01")];
        let volunteers = vec![
            create_volunteer("none", &["Cooking"], "CA", "90001", &[]),
            create_volunteer("some", &["First Aid"], "CA", "90001", &[]),
        ];

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 10);

        assert_eq!(result.pairs_considered, 2);
        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.pairs[0].volunteer.volunteer_id, "some");
    }

    #[test]
    fn test_rank_global_prefers_skill_overlap_on_tie() {
        let matcher = Matcher::with_default_weights();
        let events = vec![
            create_event("ex", &["First Aid"], "Houston, TX 77001", "2030-12-01"),
            create_event("ey", &["Logistics", "Driving"], "Somewhere", "2030-12-05"),
        ];
        // x: 5 + 3 + 2 = 10 with one skill, y: 2 * 5 = 10 with two skills
        let volunteers = vec![
            create_volunteer("x", &["First Aid"], "TX", "77001", &["2030-12-01"]),
            create_volunteer("y", &["Logistics", "Driving"], "CA", "90001", &[]),
        ];

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 10);

        assert_eq!(result.pairs.len(), 2);
        assert_eq!(result.pairs[0].score, 10);
        assert_eq!(result.pairs[1].score, 10);
        assert_eq!(result.pairs[0].volunteer.volunteer_id, "y");
    }

    #[test]
    fn test_rank_global_prefers_availability_on_tie() {
        let matcher = Matcher::new(ScoringWeights {
            skill: 5,
            availability: 2,
            postal: 2,
            region: 1,
        });
        let events = vec![
            create_event("postal", &["First Aid"], "Houston, TX 77001", "2030-12-01"),
            create_event("avail", &["First Aid"], "Somewhere", "2030-12-05"),
        ];
        let volunteers = vec![create_volunteer("v", &["First Aid"], "TX", "77001", &["2030-12-05"])];

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 10);

        assert_eq!(result.pairs[0].score, 7);
        assert_eq!(result.pairs[1].score, 7);
        assert_eq!(result.pairs[0].event.event_id, "avail");
    }

    #[test]
    fn test_rank_global_prefers_postal_over_region_on_tie() {
        let matcher = Matcher::new(ScoringWeights {
            skill: 5,
            availability: 3,
            postal: 1,
            region: 1,
        });
        let events = vec![
            create_event("region", &["First Aid"], "Dallas, TX", "2030-12-01"),
            create_event("postal", &["First Aid"], "Houston, TX 77001", "2030-12-05"),
        ];
        let volunteers = vec![create_volunteer("v", &["First Aid"], "TX", "77001", &[])];

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 10);

        assert_eq!(result.pairs[0].score, result.pairs[1].score);
        assert_eq!(result.pairs[0].event.event_id, "postal");
    }

    #[test]
    fn test_rank_global_prefers_earlier_event_on_full_tie() {
        let matcher = Matcher::with_default_weights();
        let events = vec![
            create_event("late", &["First Aid"], "Somewhere", "2030-12-09"),
            create_event("early", &["First Aid"], "Somewhere", "2030-12-02"),
        ];
        let volunteers = vec![create_volunteer("v", &["First Aid"], "CA", "90001", &[])];

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 10);

        assert_eq!(result.pairs[0].event.event_id, "early");
        assert_eq!(result.pairs[1].event.event_id, "late");
    }

    #[test]
    fn test_rank_global_skips_excluded_pairs() {
        let matcher = Matcher::with_default_weights();
        let events = vec![
            create_event("e1", &["First Aid"], "Somewhere", "2030-12-01"),
            create_event("e2", &["First Aid"], "Somewhere", "2030-12-02"),
        ];
        let volunteers = vec![create_volunteer("v", &["First Aid"], "CA", "90001", &[])];
        let exclusions = Exclusions::from_pairings(&[PairingRecord {
            volunteer_id: "v".to_string(),
            event_id: "e1".to_string(),
            status: PairingStatus::Pending,
        }]);

        let result = matcher.rank_global(&events, &volunteers, &exclusions, 10);

        assert_eq!(result.pairs_considered, 1);
        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.pairs[0].event.event_id, "e2");
    }

    #[test]
    fn test_rank_global_default_limit_of_one() {
        let matcher = Matcher::with_default_weights();
        let events = vec![create_event("e1", &["First Aid"], "Somewhere", "2030-12-01")];
        let volunteers: Vec<VolunteerProfile> = (0..5)
            .map(|i| create_volunteer(&format!("v{}", i), &["First Aid"], "CA", "90001", &[]))
            .collect();

        let result = matcher.rank_global(&events, &volunteers, &Exclusions::new(), 1);

        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.pairs[0].volunteer.volunteer_id, "v0");
    }
}
