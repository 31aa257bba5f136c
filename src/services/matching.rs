use std::sync::Arc;
use thiserror::Error;

use crate::core::{EventMatchResult, Exclusions, GlobalMatchResult, Matcher};
use crate::models::VolunteerProfile;
use crate::services::store::{MatchStore, StoreError};

pub const DEFAULT_EVENT_LIMIT: usize = 10;
pub const DEFAULT_GLOBAL_LIMIT: usize = 1;

/// Caller-visible failures of the matching operations
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream store failure: {0}")]
    Store(#[from] StoreError),
}

/// Loads fresh snapshots from the store and runs the matcher over them
///
/// Nothing is cached between calls. Any failed load aborts the operation.
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<dyn MatchStore>,
    matcher: Matcher,
    default_event_limit: usize,
    default_global_limit: usize,
}

impl MatchingService {
    pub fn new(store: Arc<dyn MatchStore>, matcher: Matcher) -> Self {
        Self {
            store,
            matcher,
            default_event_limit: DEFAULT_EVENT_LIMIT,
            default_global_limit: DEFAULT_GLOBAL_LIMIT,
        }
    }

    /// Override the limits applied when a caller does not pass one
    pub fn with_default_limits(mut self, event_limit: usize, global_limit: usize) -> Self {
        self.default_event_limit = event_limit;
        self.default_global_limit = global_limit;
        self
    }

    pub fn store(&self) -> &Arc<dyn MatchStore> {
        &self.store
    }

    /// Rank all eligible volunteers for one event, best first
    pub async fn rank_volunteers_for_event(
        &self,
        event_id: &str,
        limit: Option<usize>,
    ) -> Result<EventMatchResult, MatchError> {
        if event_id.trim().is_empty() {
            return Err(MatchError::InvalidInput("eventId must not be empty".to_string()));
        }

        let (event, volunteers) = tokio::try_join!(
            self.store.load_event(event_id),
            self.store.load_all_volunteers(),
        )?;

        let event = event.ok_or_else(|| MatchError::NotFound(format!("Event {} not found", event_id)))?;
        let exclusions = self.load_exclusions(&volunteers).await?;

        let limit = limit.unwrap_or(self.default_event_limit);
        let result = self.matcher.rank_for_event(&event, volunteers, &exclusions, limit);

        tracing::debug!(
            "Ranked {} of {} eligible volunteers for event {}",
            result.matches.len(),
            result.eligible_candidates,
            event_id
        );

        Ok(result)
    }

    /// Rank the best (volunteer, event) pairs across every event
    pub async fn rank_top_pairs_globally(&self, limit: Option<usize>) -> Result<GlobalMatchResult, MatchError> {
        let (events, volunteers) = tokio::try_join!(
            self.store.load_all_events(),
            self.store.load_all_volunteers(),
        )?;

        let exclusions = self.load_exclusions(&volunteers).await?;

        let limit = limit.unwrap_or(self.default_global_limit);
        let result = self.matcher.rank_global(&events, &volunteers, &exclusions, limit);

        tracing::debug!(
            "Ranked {} global pairs from {} volunteers x {} events ({} eligible)",
            result.pairs.len(),
            volunteers.len(),
            events.len(),
            result.pairs_considered
        );

        Ok(result)
    }

    async fn load_exclusions(&self, volunteers: &[VolunteerProfile]) -> Result<Exclusions, StoreError> {
        let volunteer_ids: Vec<String> = volunteers.iter().map(|v| v.volunteer_id.clone()).collect();
        let pairings = self.store.load_pairings_for(&volunteer_ids).await?;

        Ok(Exclusions::from_pairings(&pairings))
    }
}
