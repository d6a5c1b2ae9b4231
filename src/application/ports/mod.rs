mod language_ai_client;

pub use language_ai_client::{LanguageAiClient, ProviderError};
