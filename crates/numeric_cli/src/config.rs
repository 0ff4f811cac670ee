//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.
//!
//! ```toml
//! log_level = "debug"
//! sample_count = 10
//!
//! [random]
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use numeric_random::EngineConfig;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV_VAR: &str = "NUMERIC_LOG_LEVEL";

/// Environment variable overriding the number of samples per random command.
pub const SAMPLE_COUNT_ENV_VAR: &str = "NUMERIC_SAMPLE_COUNT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Sample count outside the accepted range.
    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSampleCount(usize),

    /// Config file unreadable or malformed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable present but unusable.
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Engine seed configuration is invalid.
    #[error(transparent)]
    Engine(#[from] numeric_random::ConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-draw events
    Trace,
    /// Engine lifecycle events
    Debug,
    /// Progress messages
    Info,
    /// Clamping and configuration warnings
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of values drawn by each random command and demo section
    pub sample_count: usize,
    /// Engine seeding
    pub random: EngineConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            sample_count: 5,
            random: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables that are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    /// Override fields through an arbitrary key lookup.
    pub fn apply_lookup<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV_VAR) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(count) = lookup(SAMPLE_COUNT_ENV_VAR) {
            self.sample_count = count.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a count", SAMPLE_COUNT_ENV_VAR, count))
            })?;
        }

        let engine = EngineConfig::from_lookup(&lookup)?;
        if engine.seed.is_some() {
            self.random = engine;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::InvalidSampleCount(self.sample_count));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose && self.log_level == LogLevel::Warn {
            self.log_level = LogLevel::Debug;
        }
        if let Some(count) = cli.sample_count {
            self.sample_count = count;
        }
        if let Some(seed) = cli.seed {
            self.random = EngineConfig::with_seed(seed);
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag; raises the default level to debug
    pub verbose: bool,
    /// Sample count override
    pub sample_count: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_lookup(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with environment variables read through `lookup`.
pub fn build_config_with_lookup<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_lookup(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
