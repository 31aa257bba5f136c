use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EventRecord, PairingRecord, VolunteerProfile};

/// Errors raised while reading snapshots from the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only queries the matching engine needs from its collaborators
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn load_event(&self, event_id: &str) -> Result<Option<EventRecord>, StoreError>;

    async fn load_all_events(&self) -> Result<Vec<EventRecord>, StoreError>;

    async fn load_all_volunteers(&self) -> Result<Vec<VolunteerProfile>, StoreError>;

    /// Every pairing record for a volunteer, whatever its status
    async fn load_pairing_history(&self, volunteer_id: &str) -> Result<Vec<PairingRecord>, StoreError>;

    /// Pairing records for a batch of volunteers
    ///
    /// Backends with a cheaper batched query should override this.
    async fn load_pairings_for(&self, volunteer_ids: &[String]) -> Result<Vec<PairingRecord>, StoreError> {
        let mut pairings = Vec::new();
        for volunteer_id in volunteer_ids {
            pairings.extend(self.load_pairing_history(volunteer_id).await?);
        }
        Ok(pairings)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
