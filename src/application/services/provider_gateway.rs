use std::future::Future;
use std::sync::Arc;

use crate::application::ports::{LanguageAiClient, ProviderError};
use crate::application::services::RetryPolicy;
use crate::domain::{
    AudioUpload, EntitiesResult, SentimentResult, SpeechCode, Transcription, TranslationCode,
};

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Entry point to the language-AI provider for the pipeline.
///
/// Every remote call runs on its own spawned task and is awaited through the
/// join handle. A caller that stops waiting (for instance on timeout) leaves
/// the call running; its result is dropped when it completes.
pub struct ProviderGateway<C>
where
    C: LanguageAiClient,
{
    client: Arc<C>,
    retry_policy: RetryPolicy,
}

impl<C> ProviderGateway<C>
where
    C: LanguageAiClient + 'static,
{
    pub fn new(client: Arc<C>, retry_policy: RetryPolicy) -> Self {
        Self {
            client,
            retry_policy,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Translates `text`. Identical codes return the input without a remote call;
    /// an empty translation from the provider also yields the input.
    pub async fn translate(
        &self,
        text: &str,
        source: TranslationCode,
        target: TranslationCode,
    ) -> Result<String, ProviderError> {
        if source == target {
            tracing::debug!(code = %source, "Source and target languages match, skipping translation");
            return Ok(text.to_string());
        }

        tracing::debug!(source = %source, target = %target, chars = text.chars().count(), "Sending translation request");

        let owned = text.to_string();
        let translated = self
            .offload(move |client| async move { client.translate(&owned, source, target).await })
            .await?;

        if translated.trim().is_empty() {
            tracing::warn!(source = %source, target = %target, "Provider returned no translated text, keeping input");
            return Ok(text.to_string());
        }

        tracing::info!(source = %source, target = %target, chars = translated.chars().count(), "Translation completed");
        Ok(translated)
    }

    pub async fn transcribe(
        &self,
        audio: AudioUpload,
        language: SpeechCode,
    ) -> Result<Transcription, ProviderError> {
        tracing::debug!(
            language = %language,
            filename = %audio.filename,
            content_type = %audio.content_type,
            bytes = audio.size_bytes(),
            "Sending transcription request"
        );

        let transcription = self
            .offload(move |client| async move { client.transcribe(audio, language).await })
            .await?;

        if transcription.is_empty() {
            return Err(ProviderError::EmptyTranscript);
        }

        tracing::info!(
            language = %language,
            detected_language = %transcription.language_code,
            status = %transcription.status,
            chars = transcription.text.chars().count(),
            "Transcription completed"
        );
        Ok(transcription)
    }

    /// Sentence-level sentiment with a majority-vote overall label.
    ///
    /// Makes up to `max_retries` attempts (at least one). Exhausted attempts,
    /// blank input and payloads without sentences all yield `None`.
    pub async fn sentiment(&self, text: &str, max_retries: u32) -> Option<SentimentResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("Empty text provided for sentiment analysis");
            return None;
        }

        let mut prepared = trimmed.to_string();
        if !prepared.ends_with(SENTENCE_TERMINATORS) {
            prepared.push('.');
        }

        let payload = self
            .with_retries("sentiment", max_retries, || {
                let prepared = prepared.clone();
                self.offload(move |client| async move { client.sentiment(&prepared).await })
            })
            .await?;

        match SentimentResult::from_payload(payload) {
            Some(result) => {
                tracing::info!(
                    overall = %result.overall_sentiment,
                    positive = result.positive_count,
                    negative = result.negative_count,
                    neutral = result.neutral_count,
                    "Sentiment analysis completed"
                );
                Some(result)
            }
            None => {
                tracing::warn!("No sentiment data in response");
                None
            }
        }
    }

    /// Named entities found in `text`. Same retry contract as [`Self::sentiment`];
    /// an empty entity list is a successful result.
    pub async fn entities(&self, text: &str, max_retries: u32) -> Option<EntitiesResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("Empty text provided for entity recognition");
            return None;
        }

        let prepared = trimmed.to_string();
        let payload = self
            .with_retries("entities", max_retries, || {
                let prepared = prepared.clone();
                self.offload(move |client| async move { client.entities(&prepared).await })
            })
            .await?;

        let result = EntitiesResult::from_payload(payload);
        tracing::info!(count = result.entity_count, "Entity recognition completed");
        Some(result)
    }

    async fn with_retries<T, F, Fut>(
        &self,
        operation: &'static str,
        max_retries: u32,
        mut attempt_call: F,
    ) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let attempts = max_retries.max(1);

        for attempt in 1..=attempts {
            if let Some(delay) = self.retry_policy.delay_before(attempt) {
                tracing::info!(
                    operation,
                    attempt,
                    attempts,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying provider call"
                );
                tokio::time::sleep(delay).await;
            }

            match attempt_call().await {
                Ok(value) => return Some(value),
                Err(e) if attempt < attempts => {
                    tracing::warn!(operation, attempt, attempts, error = %e, "Provider call failed, will retry");
                }
                Err(e) => {
                    tracing::error!(operation, attempts, error = %e, "Provider call failed after all attempts");
                }
            }
        }

        None
    }

    async fn offload<T, F, Fut>(&self, call: F) -> Result<T, ProviderError>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = Result<T, ProviderError>> + Send + 'static,
        T: Send + 'static,
    {
        tokio::spawn(call(Arc::clone(&self.client)))
            .await
            .map_err(|e| ProviderError::WorkerFailed(format!("task join error: {e}")))?
    }
}
