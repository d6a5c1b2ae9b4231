use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{AudioUpload, SpeechCode, Transcription, TranslationCode};

/// Remote language-AI provider offering translation, transcription,
/// sentiment analysis and named entity recognition.
#[async_trait]
pub trait LanguageAiClient: Send + Sync {
    /// Whether a provider credential is available. Calls fail with
    /// [`ProviderError::NotConfigured`] otherwise.
    fn is_configured(&self) -> bool;

    /// Returns the translated text, empty when the provider produced none.
    async fn translate(
        &self,
        text: &str,
        source: TranslationCode,
        target: TranslationCode,
    ) -> Result<String, ProviderError>;

    async fn transcribe(
        &self,
        audio: AudioUpload,
        language: SpeechCode,
    ) -> Result<Transcription, ProviderError>;

    /// Raw per-sentence sentiment payload.
    async fn sentiment(&self, text: &str) -> Result<Value, ProviderError>;

    /// Raw entity recognition payload.
    async fn entities(&self, text: &str) -> Result<Value, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider credential not configured")]
    NotConfigured,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no transcription text in response")]
    EmptyTranscript,
    #[error("provider worker failed: {0}")]
    WorkerFailed(String),
}
