use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::PollPolicy;
use crate::application::tools::{DEFAULT_API_BASE_URL, ToolsetConfig};
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub sarvam: SarvamSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct SarvamSettings {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub poll_max_attempts: u32,
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub poll_deadline_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, then `appsettings.{environment}` if present, then `APP__*` variables
    /// (for example `APP__SARVAM__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults and the environment's settings file, without process variables.
    pub fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("sarvam.api_key", "")?
            .set_default("sarvam.base_url", DEFAULT_API_BASE_URL)?
            .set_default("sarvam.request_timeout_secs", 60)?
            .set_default("sarvam.poll_max_attempts", 60)?
            .set_default("sarvam.poll_interval_ms", 5000)?
            .set_default("logging.level", "info,sarvam_tools=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false)))
    }
}

impl fmt::Debug for SarvamSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "[EMPTY]"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("SarvamSettings")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("poll_max_attempts", &self.poll_max_attempts)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("poll_deadline_secs", &self.poll_deadline_secs)
            .finish()
    }
}

impl SarvamSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_policy(&self) -> PollPolicy {
        let policy = PollPolicy::new(
            self.poll_max_attempts,
            Duration::from_millis(self.poll_interval_ms),
        );
        match self.poll_deadline_secs {
            Some(secs) => policy.with_deadline(Duration::from_secs(secs)),
            None => policy,
        }
    }

    pub fn toolset_config(&self) -> ToolsetConfig {
        ToolsetConfig {
            base_url: self.base_url.clone(),
            poll_policy: self.poll_policy(),
        }
    }
}

impl LoggingSettings {
    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            json_format: self.enable_json,
            default_filter: self.level.clone(),
        }
    }
}
