use async_trait::async_trait;

use crate::models::{EventRecord, PairingRecord, VolunteerProfile};
use crate::services::store::{MatchStore, StoreError};

/// Snapshot-backed store for tests, benchmarks, and database-less runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    events: Vec<EventRecord>,
    volunteers: Vec<VolunteerProfile>,
    pairings: Vec<PairingRecord>,
}

impl InMemoryStore {
    pub fn new(
        events: Vec<EventRecord>,
        volunteers: Vec<VolunteerProfile>,
        pairings: Vec<PairingRecord>,
    ) -> Self {
        Self {
            events,
            volunteers,
            pairings,
        }
    }

    pub fn with_event(mut self, event: EventRecord) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_volunteer(mut self, volunteer: VolunteerProfile) -> Self {
        self.volunteers.push(volunteer);
        self
    }

    pub fn with_pairing(mut self, pairing: PairingRecord) -> Self {
        self.pairings.push(pairing);
        self
    }
}

#[async_trait]
impl MatchStore for InMemoryStore {
    async fn load_event(&self, event_id: &str) -> Result<Option<EventRecord>, StoreError> {
        Ok(self.events.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn load_all_events(&self) -> Result<Vec<EventRecord>, StoreError> {
        Ok(self.events.clone())
    }

    async fn load_all_volunteers(&self) -> Result<Vec<VolunteerProfile>, StoreError> {
        Ok(self.volunteers.clone())
    }

    async fn load_pairing_history(&self, volunteer_id: &str) -> Result<Vec<PairingRecord>, StoreError> {
        Ok(self
            .pairings
            .iter()
            .filter(|p| p.volunteer_id == volunteer_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PairingStatus;

    #[test]
    fn test_pairing_history_is_per_volunteer() {
        let store = InMemoryStore::default()
            .with_pairing(PairingRecord {
                volunteer_id: "v1".to_string(),
                event_id: "e1".to_string(),
                status: PairingStatus::Pending,
            })
            .with_pairing(PairingRecord {
                volunteer_id: "v2".to_string(),
                event_id: "e1".to_string(),
                status: PairingStatus::Confirmed,
            });

        let history = tokio_test::block_on(store.load_pairing_history("v1")).unwrap();
        assert_eq!(history.len(), 1);

        let batch = tokio_test::block_on(
            store.load_pairings_for(&["v1".to_string(), "v2".to_string(), "v3".to_string()]),
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_missing_event_is_none() {
        let store = InMemoryStore::default();
        assert!(tokio_test::block_on(store.load_event("missing")).unwrap().is_none());
    }
}
