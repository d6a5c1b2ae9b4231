use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{PipelineTimeouts, RetryPolicy};

pub const PROVIDER_TOKEN_ENV: &str = "LELAPA_API_TOKEN";
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://vulavula-services.lelapa.ai/api/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub translate_timeout_ms: u64,
    pub analysis_timeout_ms: u64,
    pub retry_base_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{environment}` if present, then
    /// `APP__SECTION__KEY` environment variables. The provider token falls back
    /// to `LELAPA_API_TOKEN`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("provider.base_url", DEFAULT_PROVIDER_BASE_URL)?
            .set_default("provider.request_timeout_secs", 30)?
            .set_default("pipeline.translate_timeout_ms", 3000)?
            .set_default("pipeline.analysis_timeout_ms", 3000)?
            .set_default("pipeline.retry_base_delay_ms", 1000)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.provider.api_token = settings
            .provider
            .api_token
            .take()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| std::env::var(PROVIDER_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty());

        Ok(settings)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb * 1024 * 1024
    }
}

impl ProviderSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl PipelineSettings {
    pub fn timeouts(&self) -> PipelineTimeouts {
        let translate = Duration::from_millis(self.translate_timeout_ms);
        PipelineTimeouts {
            translate_in: translate,
            analyze: Duration::from_millis(self.analysis_timeout_ms),
            translate_out: translate,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(Duration::from_millis(self.retry_base_delay_ms))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
                max_upload_mb: 25,
            },
            provider: ProviderSettings {
                base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
                api_token: None,
                request_timeout_secs: 30,
            },
            pipeline: PipelineSettings {
                translate_timeout_ms: 3000,
                analysis_timeout_ms: 3000,
                retry_base_delay_ms: 1000,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
        }
    }
}
