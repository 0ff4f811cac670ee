//! Engine seeding configuration.
//!
//! Loads the optional fixed seed from the environment or from a deserialised
//! table (e.g. a `[random]` section of a TOML file).

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding a fixed engine seed.
pub const SEED_ENV_VAR: &str = "NUMERIC_RNG_SEED";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Seed text is not a decimal or hexadecimal `u64`.
    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),
}

/// How engines are seeded on construction.
///
/// With `seed: None` (the default) engines draw their seed from OS entropy.
/// With a fixed seed every run produces the same sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Entropy-seeded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads [`SEED_ENV_VAR`]; an unset or empty variable leaves the seed unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV_VAR) {
            if !raw.trim().is_empty() {
                config.seed = Some(parse_seed(&raw)?);
            }
        }

        Ok(config)
    }

    /// Returns `true` when engines built from this config are reproducible.
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
    }
}

/// Parse a seed, accepting decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed(raw.to_string()))
}
