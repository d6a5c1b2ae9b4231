use crate::presentation::config::{Environment, LoggingSettings};

const CRATE_DIRECTIVES: &str = "agrilingo=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    /// JSON output is forced in production; `RUST_LOG` still overrides the filter.
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json || environment.is_production(),
            default_filter: format!("{},{}", logging.level, CRATE_DIRECTIVES),
        }
    }
}
