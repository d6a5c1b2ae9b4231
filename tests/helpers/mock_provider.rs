use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use agrilingo::application::ports::{LanguageAiClient, ProviderError};
use agrilingo::domain::{AudioUpload, SpeechCode, Transcription, TranslationCode};
use serde_json::{Value, json};

pub fn positive_sentiment_payload() -> Value {
    json!({
        "sentiments": [
            {"text": "Harvest was excellent this year.", "sentiment": [{"label": "positive", "score": 0.98}]}
        ]
    })
}

pub fn location_entities_payload() -> Value {
    json!([
        {"entity": "location", "word": "Lagos", "start": 10, "end": 15}
    ])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    pub text: String,
    pub source: TranslationCode,
    pub target: TranslationCode,
}

/// Scriptable stand-in for the provider. Translations are rendered as
/// `"[target] text"` so tests can see which direction ran.
pub struct MockProvider {
    configured: bool,
    translate_fails: bool,
    translate_delay: Duration,
    transcript: Option<String>,
    transcript_id: Option<String>,
    sentiment_payload: Option<Value>,
    sentiment_delay: Duration,
    sentiment_failures: AtomicUsize,
    entities_payload: Option<Value>,
    entities_delay: Duration,
    translate_calls: Mutex<Vec<TranslateCall>>,
    transcribe_calls: Mutex<Vec<SpeechCode>>,
    sentiment_calls: Mutex<Vec<String>>,
    entities_calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            configured: true,
            translate_fails: false,
            translate_delay: Duration::ZERO,
            transcript: Some("Harvest was excellent this year".to_string()),
            transcript_id: None,
            sentiment_payload: Some(positive_sentiment_payload()),
            sentiment_delay: Duration::ZERO,
            sentiment_failures: AtomicUsize::new(0),
            entities_payload: Some(location_entities_payload()),
            entities_delay: Duration::ZERO,
            translate_calls: Mutex::new(Vec::new()),
            transcribe_calls: Mutex::new(Vec::new()),
            sentiment_calls: Mutex::new(Vec::new()),
            entities_calls: AtomicUsize::new(0),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn with_failing_translation(mut self) -> Self {
        self.translate_fails = true;
        self
    }

    pub fn with_translate_delay(mut self, delay: Duration) -> Self {
        self.translate_delay = delay;
        self
    }

    pub fn with_transcript(mut self, transcript: Option<&str>) -> Self {
        self.transcript = transcript.map(str::to_string);
        self
    }

    pub fn with_transcript_id(mut self, id: &str) -> Self {
        self.transcript_id = Some(id.to_string());
        self
    }

    pub fn with_sentiment(mut self, payload: Option<Value>) -> Self {
        self.sentiment_payload = payload;
        self
    }

    pub fn with_sentiment_delay(mut self, delay: Duration) -> Self {
        self.sentiment_delay = delay;
        self
    }

    /// The first `failures` sentiment calls fail before the payload is served.
    pub fn with_sentiment_failures(self, failures: usize) -> Self {
        self.sentiment_failures.store(failures, Ordering::SeqCst);
        self
    }

    pub fn with_entities(mut self, payload: Option<Value>) -> Self {
        self.entities_payload = payload;
        self
    }

    pub fn with_entities_delay(mut self, delay: Duration) -> Self {
        self.entities_delay = delay;
        self
    }

    pub fn translate_calls(&self) -> Vec<TranslateCall> {
        self.translate_calls.lock().unwrap().clone()
    }

    pub fn transcribe_calls(&self) -> Vec<SpeechCode> {
        self.transcribe_calls.lock().unwrap().clone()
    }

    pub fn sentiment_calls(&self) -> Vec<String> {
        self.sentiment_calls.lock().unwrap().clone()
    }

    pub fn sentiment_call_count(&self) -> usize {
        self.sentiment_calls.lock().unwrap().len()
    }

    pub fn entities_call_count(&self) -> usize {
        self.entities_calls.load(Ordering::SeqCst)
    }

    pub fn total_remote_calls(&self) -> usize {
        self.translate_calls().len()
            + self.transcribe_calls().len()
            + self.sentiment_call_count()
            + self.entities_call_count()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LanguageAiClient for MockProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn translate(
        &self,
        text: &str,
        source: TranslationCode,
        target: TranslationCode,
    ) -> Result<String, ProviderError> {
        self.translate_calls.lock().unwrap().push(TranslateCall {
            text: text.to_string(),
            source,
            target,
        });
        tokio::time::sleep(self.translate_delay).await;

        if self.translate_fails {
            return Err(ProviderError::ApiRequestFailed("status 502: bad gateway".to_string()));
        }
        Ok(format!("[{}] {}", target, text))
    }

    async fn transcribe(
        &self,
        _audio: AudioUpload,
        language: SpeechCode,
    ) -> Result<Transcription, ProviderError> {
        self.transcribe_calls.lock().unwrap().push(language);

        match &self.transcript {
            Some(text) => Ok(Transcription {
                id: self.transcript_id.clone(),
                text: text.clone(),
                language_code: language.to_string(),
                status: "COMPLETED".to_string(),
            }),
            None => Err(ProviderError::ApiRequestFailed(
                "status 500: transcription backend down".to_string(),
            )),
        }
    }

    async fn sentiment(&self, text: &str) -> Result<Value, ProviderError> {
        self.sentiment_calls.lock().unwrap().push(text.to_string());
        tokio::time::sleep(self.sentiment_delay).await;

        let remaining = self.sentiment_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.sentiment_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ProviderError::ApiRequestFailed("status 503: busy".to_string()));
        }

        self.sentiment_payload
            .clone()
            .ok_or_else(|| ProviderError::ApiRequestFailed("status 500: sentiment down".to_string()))
    }

    async fn entities(&self, _text: &str) -> Result<Value, ProviderError> {
        self.entities_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.entities_delay).await;

        self.entities_payload
            .clone()
            .ok_or_else(|| ProviderError::ApiRequestFailed("status 500: ner down".to_string()))
    }
}
