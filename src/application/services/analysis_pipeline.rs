use std::time::Duration;

use crate::application::ports::{LanguageAiClient, ProviderError};
use crate::application::services::{ProviderGateway, format_analysis};
use crate::domain::language_registry::{self, ENGLISH};
use crate::domain::{
    AnalysisId, AudioUpload, EntitiesResult, SentimentResult, SpeechCode, Transcription,
    TranslationCode,
};

pub const DEGRADED_SERVICE_SENTENCE: &str =
    "The analysis service is not responding. Please try again later.";

const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(3);

/// Sentiment and entities get a single pass from the pipeline; the analyze
/// timeout leaves no room for backoff.
const ANALYSIS_ATTEMPTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTimeouts {
    pub translate_in: Duration,
    pub analyze: Duration,
    pub translate_out: Duration,
}

impl Default for PipelineTimeouts {
    fn default() -> Self {
        Self {
            translate_in: DEFAULT_STEP_TIMEOUT,
            analyze: DEFAULT_STEP_TIMEOUT,
            translate_out: DEFAULT_STEP_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextAnalysisRequest {
    pub content: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct AudioAnalysisRequest {
    pub audio: AudioUpload,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub id: AnalysisId,
    pub content: String,
    pub language: String,
    pub sentiment: Option<SentimentResult>,
    pub entities: Option<EntitiesResult>,
}

#[derive(Debug, Clone)]
pub struct TranscriptionResponse {
    pub id: AnalysisId,
    pub transcription_text: String,
    pub analysis: String,
    pub language: String,
    pub sentiment: Option<SentimentResult>,
    pub entities: Option<EntitiesResult>,
}

/// Outcome of the joint sentiment + entities step.
#[derive(Debug, Default)]
struct Findings {
    sentiment: Option<SentimentResult>,
    entities: Option<EntitiesResult>,
    timed_out: bool,
}

impl Findings {
    fn timed_out() -> Self {
        Self {
            timed_out: true,
            ..Self::default()
        }
    }

    fn summary(&self) -> String {
        if self.timed_out {
            return DEGRADED_SERVICE_SENTENCE.to_string();
        }
        format_analysis(self.sentiment.as_ref(), self.entities.as_ref())
    }
}

/// Runs the text and audio analysis flows against the provider.
///
/// Only validation failures and transcription failures surface as errors.
/// Translation and analysis problems degrade to fallback text.
pub struct AnalysisPipeline<C>
where
    C: LanguageAiClient,
{
    gateway: ProviderGateway<C>,
    timeouts: PipelineTimeouts,
}

impl<C> AnalysisPipeline<C>
where
    C: LanguageAiClient + 'static,
{
    pub fn new(gateway: ProviderGateway<C>, timeouts: PipelineTimeouts) -> Self {
        Self { gateway, timeouts }
    }

    pub fn is_provider_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    #[tracing::instrument(skip_all, fields(language = %request.language))]
    pub async fn analyze_text(
        &self,
        request: TextAnalysisRequest,
    ) -> Result<AnalysisResponse, PipelineError> {
        if request.content.trim().is_empty() {
            return Err(PipelineError::EmptyContent);
        }
        if !language_registry::supports_translation(&request.language) {
            return Err(PipelineError::UnsupportedLanguage {
                language: request.language,
                supported: language_registry::translation_language_names().join(", "),
            });
        }
        self.ensure_provider_configured()?;

        let source = language_registry::translation_code_of(&request.language);
        let english_text = self.translate_to_english(&request.content, source).await;

        let findings = self.analyze(&english_text).await;
        let summary = findings.summary();
        tracing::info!(timed_out = findings.timed_out, "Analysis formatted");

        let content = self.translate_back(summary, &request.language).await;

        Ok(AnalysisResponse {
            id: AnalysisId::for_text(),
            content,
            language: request.language,
            sentiment: findings.sentiment,
            entities: findings.entities,
        })
    }

    #[tracing::instrument(skip_all, fields(language = %request.language))]
    pub async fn analyze_audio(
        &self,
        request: AudioAnalysisRequest,
    ) -> Result<TranscriptionResponse, PipelineError> {
        if !language_registry::supports_speech(&request.language) {
            return Err(PipelineError::UnsupportedLanguage {
                language: request.language,
                supported: language_registry::speech_language_names().join(", "),
            });
        }
        self.ensure_provider_configured()?;
        if request.audio.is_empty() {
            return Err(PipelineError::EmptyAudio);
        }

        let transcription = self.transcribe(request.audio).await?;

        let findings = self.analyze(&transcription.text).await;
        let summary = findings.summary();
        tracing::info!(timed_out = findings.timed_out, "Analysis formatted");

        let analysis = self.translate_back(summary, &request.language).await;

        let id = transcription
            .id
            .map(AnalysisId::from_provider)
            .unwrap_or_else(AnalysisId::for_audio);

        Ok(TranscriptionResponse {
            id,
            transcription_text: transcription.text,
            analysis,
            language: request.language,
            sentiment: findings.sentiment,
            entities: findings.entities,
        })
    }

    fn ensure_provider_configured(&self) -> Result<(), PipelineError> {
        if self.gateway.is_configured() {
            Ok(())
        } else {
            Err(PipelineError::ProviderNotConfigured)
        }
    }

    async fn translate_to_english(&self, text: &str, source: TranslationCode) -> String {
        if source == TranslationCode::ENGLISH {
            tracing::debug!("Text already in English, skipping translation");
            return text.to_string();
        }

        self.translate_within(
            text,
            source,
            TranslationCode::ENGLISH,
            self.timeouts.translate_in,
            "translate_to_english",
        )
        .await
    }

    /// Transcription always targets English; the caller's language only
    /// affects the response translation.
    async fn transcribe(&self, audio: AudioUpload) -> Result<Transcription, PipelineError> {
        self.gateway
            .transcribe(audio, SpeechCode::ENGLISH)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription failed");
                PipelineError::Transcription(e)
            })
    }

    /// Runs sentiment and entities concurrently under one shared deadline.
    /// When the deadline passes, whatever finished is discarded.
    async fn analyze(&self, english_text: &str) -> Findings {
        let sentiment = self.gateway.sentiment(english_text, ANALYSIS_ATTEMPTS);
        let entities = self.gateway.entities(english_text, ANALYSIS_ATTEMPTS);

        match tokio::time::timeout(self.timeouts.analyze, async {
            tokio::join!(sentiment, entities)
        })
        .await
        {
            Ok((sentiment, entities)) => Findings {
                sentiment,
                entities,
                timed_out: false,
            },
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeouts.analyze.as_millis() as u64,
                    "Analysis timed out"
                );
                Findings::timed_out()
            }
        }
    }

    async fn translate_back(&self, text: String, language: &str) -> String {
        if language == ENGLISH {
            tracing::debug!("Target language is English, skipping translation");
            return text;
        }

        let target = language_registry::translation_code_of(language);
        self.translate_within(
            &text,
            TranslationCode::ENGLISH,
            target,
            self.timeouts.translate_out,
            "translate_back",
        )
        .await
    }

    /// Translation bounded by `budget`; on timeout or error the input is kept.
    async fn translate_within(
        &self,
        text: &str,
        source: TranslationCode,
        target: TranslationCode,
        budget: Duration,
        step: &'static str,
    ) -> String {
        match tokio::time::timeout(budget, self.gateway.translate(text, source, target)).await {
            Ok(Ok(translated)) => translated,
            Ok(Err(e)) => {
                tracing::warn!(step, error = %e, "Translation failed, using untranslated text");
                text.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    step,
                    timeout_ms = budget.as_millis() as u64,
                    "Translation timed out, using untranslated text"
                );
                text.to_string()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Content cannot be empty")]
    EmptyContent,
    #[error("Audio file cannot be empty")]
    EmptyAudio,
    #[error("Unsupported language: {language}. Supported: {supported}")]
    UnsupportedLanguage { language: String, supported: String },
    #[error("Lelapa.ai API token not configured")]
    ProviderNotConfigured,
    #[error("Transcription failed: {0}")]
    Transcription(ProviderError),
    #[error("Analysis failed: {0}")]
    Unexpected(String),
}
