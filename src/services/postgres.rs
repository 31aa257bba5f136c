use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{EventRecord, PairingRecord, PairingStatus, Urgency, VolunteerProfile};
use crate::services::store::{MatchStore, StoreError};

/// Urgency levels as stored in PostgreSQL
#[derive(Debug, Clone, Copy, sqlx::Type)]
#[sqlx(type_name = "urgency_level", rename_all = "lowercase")]
pub enum PgUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl From<PgUrgency> for Urgency {
    fn from(value: PgUrgency) -> Self {
        match value {
            PgUrgency::Low => Urgency::Low,
            PgUrgency::Medium => Urgency::Medium,
            PgUrgency::High => Urgency::High,
            PgUrgency::Critical => Urgency::Critical,
        }
    }
}

/// Pairing statuses as stored in PostgreSQL
#[derive(Debug, Clone, Copy, sqlx::Type)]
#[sqlx(type_name = "pairing_status", rename_all = "lowercase")]
pub enum PgPairingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<PgPairingStatus> for PairingStatus {
    fn from(value: PgPairingStatus) -> Self {
        match value {
            PgPairingStatus::Pending => PairingStatus::Pending,
            PgPairingStatus::Confirmed => PairingStatus::Confirmed,
            PgPairingStatus::Cancelled => PairingStatus::Cancelled,
        }
    }
}

const EVENT_COLUMNS: &str =
    "event_id, event_name, description, required_skills, location, event_date, urgency";

/// PostgreSQL-backed snapshot reader
///
/// Profiles, events, and pairing history are owned by the surrounding
/// application; this client only reads them.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn event_from_row(row: &PgRow) -> Result<EventRecord, sqlx::Error> {
    let urgency: PgUrgency = row.try_get("urgency")?;
    let event_date: NaiveDateTime = row.try_get("event_date")?;

    Ok(EventRecord {
        event_id: row.try_get("event_id")?,
        event_name: row.try_get("event_name")?,
        description: row.try_get("description")?,
        required_skills: row.try_get("required_skills")?,
        location: row.try_get("location")?,
        event_date,
        urgency: urgency.into(),
    })
}

fn volunteer_from_row(row: &PgRow) -> Result<VolunteerProfile, sqlx::Error> {
    let availability: Vec<NaiveDate> = row.try_get("availability")?;

    Ok(VolunteerProfile {
        volunteer_id: row.try_get("volunteer_id")?,
        full_name: row.try_get("full_name")?,
        skills: row.try_get("skills")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        zipcode: row.try_get("zipcode")?,
        availability,
    })
}

fn pairing_from_row(row: &PgRow) -> Result<PairingRecord, sqlx::Error> {
    let status: PgPairingStatus = row.try_get("status")?;

    Ok(PairingRecord {
        volunteer_id: row.try_get("volunteer_id")?,
        event_id: row.try_get("event_id")?,
        status: status.into(),
    })
}

#[async_trait]
impl MatchStore for PostgresStore {
    async fn load_event(&self, event_id: &str) -> Result<Option<EventRecord>, StoreError> {
        let query = format!("SELECT {} FROM events WHERE event_id = $1", EVENT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(event_from_row).transpose()?)
    }

    async fn load_all_events(&self) -> Result<Vec<EventRecord>, StoreError> {
        let query = format!("SELECT {} FROM events ORDER BY event_date, event_id", EVENT_COLUMNS);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let events = rows.iter().map(event_from_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} events", events.len());

        Ok(events)
    }

    async fn load_all_volunteers(&self) -> Result<Vec<VolunteerProfile>, StoreError> {
        let query = r#"
            SELECT volunteer_id, full_name, skills, city, state, zipcode, availability
            FROM volunteers
            ORDER BY volunteer_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let volunteers = rows.iter().map(volunteer_from_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} volunteers", volunteers.len());

        Ok(volunteers)
    }

    async fn load_pairing_history(&self, volunteer_id: &str) -> Result<Vec<PairingRecord>, StoreError> {
        let query = r#"
            SELECT volunteer_id, event_id, status
            FROM volunteer_history
            WHERE volunteer_id = $1
        "#;

        let rows = sqlx::query(query).bind(volunteer_id).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(pairing_from_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn load_pairings_for(&self, volunteer_ids: &[String]) -> Result<Vec<PairingRecord>, StoreError> {
        let query = r#"
            SELECT volunteer_id, event_id, status
            FROM volunteer_history
            WHERE volunteer_id = ANY($1)
        "#;

        let rows = sqlx::query(query)
            .bind(volunteer_ids)
            .fetch_all(&self.pool)
            .await?;

        let pairings = rows.iter().map(pairing_from_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            "Loaded {} pairing records for {} volunteers",
            pairings.len(),
            volunteer_ids.len()
        );

        Ok(pairings)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
