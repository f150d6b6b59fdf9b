//! Configuration management
//!
//! The backend location is resolved once at startup from, in order of
//! precedence: CLI override, `REVIEW_SENTIMENT__*` environment variables,
//! config file, built-in defaults.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "REVIEW_SENTIMENT";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the classification service, e.g. `http://localhost:5000`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Optional retry policy. The default performs a single attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_attempts() -> u32 {
    1
}

fn default_backoff_ms() -> u64 {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl RetryConfig {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 1
    }
}

/// Environment snapshot. `None` reads the process environment.
type EnvVars = Option<config::Map<String, String>>;

const DEFAULT_PATHS: [&str; 3] = [
    "review-sentiment.toml",
    "config.toml",
    "~/.config/review-sentiment/config.toml",
];

impl Config {
    /// Load configuration from file, with environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path.as_ref(), None)
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> Result<Self> {
        Self::load_first(&DEFAULT_PATHS, None)
    }

    /// Defaults plus environment overrides only
    pub fn from_env() -> Result<Self> {
        Self::build(None, None)
    }

    fn load_with_env(path: &Path, env: EnvVars) -> Result<Self> {
        if !path.exists() {
            return Err(ClientError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::build(Some(path), env)
    }

    fn load_first(paths: &[&str], env: EnvVars) -> Result<Self> {
        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                tracing::debug!("Loading config from {}", expanded);
                return Self::load_with_env(Path::new(expanded.as_ref()), env);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::build(None, env)
    }

    fn build(path: Option<&Path>, env: EnvVars) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder.add_source(env_source(env)).build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL (CLI flag)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.api.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(ClientError::Config("api.base_url must not be empty".into()));
        }
        reqwest::Url::parse(base)
            .map_err(|e| ClientError::Config(format!("invalid api.base_url {base:?}: {e}")))?;
        if self.api.retry.max_attempts == 0 {
            return Err(ClientError::Config(
                "api.retry.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn env_source(env: EnvVars) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .source(env)
}
