//! Domain configuration read from the process environment.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;
use crate::id::IdGenerator;

const ID_STRATEGY_KEY: &str = "ORDERING_ID_STRATEGY";

/// Which UUID flavour backs freshly generated identities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random (UUIDv4).
    V4,
    /// Time-ordered (UUIDv7).
    #[default]
    V7,
}

impl IdStrategy {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v4" | "random" => Ok(Self::V4),
            "v7" | "time" => Ok(Self::V7),
            _ => Err(ConfigError::UnsupportedValue {
                key: ID_STRATEGY_KEY,
                value: value.to_string(),
            }),
        }
    }
}

impl IdGenerator for IdStrategy {
    fn next_uuid(&self) -> Uuid {
        match self {
            IdStrategy::V4 => Uuid::new_v4(),
            IdStrategy::V7 => Uuid::now_v7(),
        }
    }
}

/// Settings for the ordering domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainConfig {
    pub id_strategy: IdStrategy,
}

impl DomainConfig {
    /// Read configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let id_strategy = match lookup(ID_STRATEGY_KEY) {
            Some(raw) => IdStrategy::parse(&raw)?,
            None => IdStrategy::default(),
        };

        tracing::debug!(?id_strategy, "domain configuration loaded");
        Ok(Self { id_strategy })
    }

    /// Identity generator selected by this configuration.
    pub fn id_generator(&self) -> IdStrategy {
        self.id_strategy
    }
}
