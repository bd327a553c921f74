//! Studio configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `atelier/atelier.toml` in the user config directory, if present
//! 3. An explicit file passed on the command line
//! 4. `ATELIER_*` environment variables, nested keys separated by `__`
//!    (e.g. `ATELIER_POLLING__INTERVAL_SECS=5`)
//!
//! Video polling gives up after 60 polls by default; `polling.max_attempts = 0`
//! polls until the job finishes.

use atelier_error::{AtelierResult, ConfigError};
use atelier_models::{DEFAULT_BASE_URL, GeminiModels};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Video job polling behavior.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds to wait before each poll
    interval_secs: u64,
    /// Polls allowed before giving up; `0` or `None` polls until the job
    /// finishes
    max_attempts: Option<u32>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_attempts: Some(default_max_attempts()),
        }
    }
}

impl PollingConfig {
    /// The fixed wait between polls.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// The effective poll limit, `None` when polling is unbounded.
    ///
    /// A zero limit is unbounded, which lets files and environment
    /// variables override the default.
    pub fn attempt_limit(&self) -> Option<u32> {
        self.max_attempts.filter(|&max| max > 0)
    }
}

fn default_interval_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    60
}

/// Top-level studio configuration.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct StudioConfig {
    /// Gemini API endpoint
    api_base_url: String,
    /// Model identifiers per generation path
    models: GeminiModels,
    /// Video polling behavior
    polling: PollingConfig,
    /// Reasoning budget for recommendations
    thinking_budget: Option<u32>,
    /// Aspect ratio of generated images
    image_aspect_ratio: String,
    /// Resolution of generated videos
    video_resolution: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            models: GeminiModels::default(),
            polling: PollingConfig::default(),
            thinking_budget: Some(32768),
            image_aspect_ratio: "1:1".to_string(),
            video_resolution: "720p".to_string(),
        }
    }
}

impl StudioConfig {
    /// Location of the per-user configuration file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("atelier").join("atelier.toml"))
    }

    /// Loads configuration from the user file, an optional explicit file,
    /// and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, any file is invalid,
    /// or the merged values fail validation.
    pub fn load(explicit: Option<&Path>) -> AtelierResult<Self> {
        Self::load_sources(Self::user_config_path(), explicit, None)
    }

    /// Loads configuration from the given sources.
    ///
    /// `env` replaces the process environment when provided; keys use the
    /// same `ATELIER_` names.
    #[instrument(skip(env))]
    pub fn load_sources(
        user_file: Option<PathBuf>,
        explicit: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> AtelierResult<Self> {
        let defaults = Config::try_from(&Self::default())
            .map_err(|e| ConfigError::new(format!("Invalid defaults: {}", e)))?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = user_file {
            debug!(path = %path.display(), "Checking user config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("ATELIER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Checks values the type system does not.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_secs == 0 {
            return Err(ConfigError::new("polling.interval_secs must be at least 1"));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::new("api_base_url must not be empty"));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> AtelierResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render configuration: {}", e)).into())
    }
}
