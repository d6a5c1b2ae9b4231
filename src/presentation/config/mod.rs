mod environment;
mod settings;

pub use environment::{ENVIRONMENT_ENV, Environment};
pub use settings::{
    DEFAULT_PROVIDER_BASE_URL, LoggingSettings, PROVIDER_TOKEN_ENV, PipelineSettings,
    ProviderSettings, ServerSettings, Settings,
};
