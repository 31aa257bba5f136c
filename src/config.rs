use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::ScoringWeights;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    #[validate(nested)]
    pub matching: MatchingSettings,
    #[serde(default)]
    #[validate(nested)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_event_limit")]
    #[validate(range(min = 1))]
    pub default_event_limit: usize,
    #[serde(default = "default_global_limit")]
    #[validate(range(min = 1))]
    pub default_global_limit: usize,
    /// Upper bound on caller-supplied limits at the HTTP boundary
    #[serde(default = "default_max_limit")]
    #[validate(range(min = 1))]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_event_limit: default_event_limit(),
            default_global_limit: default_global_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_event_limit() -> usize { 10 }
fn default_global_limit() -> usize { 1 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ScoringSettings {
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

/// Scoring weights; every contribution must be worth at least one point so a
/// positive score always carries a reason, and at most 1000 so totals stay small
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_locality_order"))]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    #[validate(range(min = 1, max = 1000))]
    pub skill: u32,
    #[serde(default = "default_availability_weight")]
    #[validate(range(min = 1, max = 1000))]
    pub availability: u32,
    #[serde(default = "default_postal_weight")]
    #[validate(range(min = 1, max = 1000))]
    pub postal: u32,
    #[serde(default = "default_region_weight")]
    #[validate(range(min = 1, max = 1000))]
    pub region: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            availability: default_availability_weight(),
            postal: default_postal_weight(),
            region: default_region_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        Self {
            skill: value.skill,
            availability: value.availability,
            postal: value.postal,
            region: value.region,
        }
    }
}

fn default_skill_weight() -> u32 { 5 }
fn default_availability_weight() -> u32 { 3 }
fn default_postal_weight() -> u32 { 2 }
fn default_region_weight() -> u32 { 1 }

fn validate_locality_order(weights: &WeightsConfig) -> Result<(), ValidationError> {
    if weights.postal < weights.region {
        return Err(ValidationError::new("postal_below_region"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VOLMATCH_)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VOLMATCH__SERVER__PORT -> server.port
            .add_source(env_source());

        if let Ok(database_url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        Self::finish(builder.build()?)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("VOLMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
