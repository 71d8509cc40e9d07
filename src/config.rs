use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-rule weight overrides; defaults are the production scoring table
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_shared_interest_weight")]
    pub shared_interest: u32,
    #[serde(default = "default_shared_industry_weight")]
    pub shared_industry: u32,
    #[serde(default = "default_experience_weight")]
    pub experience: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
    #[serde(default = "default_frequency_weight")]
    pub frequency: u32,
    #[serde(default = "default_high_rating_weight")]
    pub high_rating: u32,
    #[serde(default = "default_same_city_weight")]
    pub same_city: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            shared_interest: default_shared_interest_weight(),
            shared_industry: default_shared_industry_weight(),
            experience: default_experience_weight(),
            availability: default_availability_weight(),
            frequency: default_frequency_weight(),
            high_rating: default_high_rating_weight(),
            same_city: default_same_city_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(cfg: WeightsConfig) -> Self {
        Self {
            shared_interest: cfg.shared_interest,
            shared_industry: cfg.shared_industry,
            experience: cfg.experience,
            availability: cfg.availability,
            frequency: cfg.frequency,
            high_rating: cfg.high_rating,
            same_city: cfg.same_city,
        }
    }
}

fn default_shared_interest_weight() -> u32 { 20 }
fn default_shared_industry_weight() -> u32 { 15 }
fn default_experience_weight() -> u32 { 10 }
fn default_availability_weight() -> u32 { 8 }
fn default_frequency_weight() -> u32 { 5 }
fn default_high_rating_weight() -> u32 { 5 }
fn default_same_city_weight() -> u32 { 10 }

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
    /// 4. Environment variables (prefixed with MENTOR_)
    ///    e.g., MENTOR__SCORING__WEIGHTS__SHARED_INTEREST -> scoring.weights.shared_interest
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Scoring weights as the engine consumes them
    pub fn scoring_weights(&self) -> ScoringWeights {
        self.scoring.weights.clone().into()
    }
}
