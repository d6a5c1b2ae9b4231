use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{LanguageAiClient, ProviderError};
use crate::domain::{
    AudioUpload, DEFAULT_TRANSCRIPTION_STATUS, SpeechCode, Transcription, TranslationCode,
};
use crate::presentation::config::ProviderSettings;

const CLIENT_TOKEN_HEADER: &str = "X-CLIENT-TOKEN";
const TRANSLATE_PATH: &str = "/translate/process";
const TRANSCRIBE_PATH: &str = "/transcribe/sync/file";
const SENTIMENT_PATH: &str = "/sentiment_analysis/process";
const ENTITIES_PATH: &str = "/entity_recognition/process";

/// HTTP client for the Lelapa.ai Vulavula API.
pub struct VulavulaClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl VulavulaClient {
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ProviderError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|token| !token.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Self::new(
            &settings.base_url,
            settings.api_token.clone(),
            settings.request_timeout(),
        )
    }

    fn token(&self) -> Result<&str, ProviderError> {
        self.api_token.as_deref().ok_or(ProviderError::NotConfigured)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header(CLIENT_TOKEN_HEADER, self.token()?)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        read_json(response).await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ProviderError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(ProviderError::ApiRequestFailed(format!(
            "status {}: {}",
            status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::InvalidResponse(format!("parse response: {}", e)))
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    input_text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translation: Vec<TranslatedSegment>,
}

#[derive(Deserialize)]
struct TranslatedSegment {
    #[serde(default)]
    translated_text: String,
}

#[derive(Serialize)]
struct EncodedTextRequest<'a> {
    encoded_text: &'a str,
}

#[derive(Deserialize)]
struct TranscribeResponse {
    id: Option<Value>,
    #[serde(default)]
    transcription_text: String,
    language_code: Option<String>,
    transcription_status: Option<String>,
}

#[async_trait]
impl LanguageAiClient for VulavulaClient {
    fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }

    async fn translate(
        &self,
        text: &str,
        source: TranslationCode,
        target: TranslationCode,
    ) -> Result<String, ProviderError> {
        let payload = self
            .post_json(
                TRANSLATE_PATH,
                &TranslateRequest {
                    input_text: text,
                    source_lang: source.as_str(),
                    target_lang: target.as_str(),
                },
            )
            .await?;

        let parsed: TranslateResponse = serde_json::from_value(payload)
            .map_err(|e| ProviderError::InvalidResponse(format!("translation: {}", e)))?;

        Ok(parsed
            .translation
            .into_iter()
            .next()
            .map(|segment| segment.translated_text)
            .unwrap_or_default())
    }

    async fn transcribe(
        &self,
        audio: AudioUpload,
        language: SpeechCode,
    ) -> Result<Transcription, ProviderError> {
        let url = format!("{}{}", self.base_url, TRANSCRIBE_PATH);

        let file_part = multipart::Part::bytes(audio.data.to_vec())
            .file_name(audio.filename)
            .mime_str(&audio.content_type)
            .map_err(|e| ProviderError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("lang_code", language.as_str())
            .part("file", file_part);

        let response = self
            .client
            .post(&url)
            .header(CLIENT_TOKEN_HEADER, self.token()?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        let payload = read_json(response).await?;
        let parsed: TranscribeResponse = serde_json::from_value(payload)
            .map_err(|e| ProviderError::InvalidResponse(format!("transcription: {}", e)))?;

        Ok(Transcription {
            id: parsed.id.and_then(|id| match id {
                Value::String(s) if !s.is_empty() => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            text: parsed.transcription_text.trim().to_string(),
            language_code: parsed
                .language_code
                .unwrap_or_else(|| language.as_str().to_string()),
            status: parsed
                .transcription_status
                .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_STATUS.to_string()),
        })
    }

    async fn sentiment(&self, text: &str) -> Result<Value, ProviderError> {
        self.post_json(SENTIMENT_PATH, &EncodedTextRequest { encoded_text: text })
            .await
    }

    async fn entities(&self, text: &str) -> Result<Value, ProviderError> {
        self.post_json(ENTITIES_PATH, &EncodedTextRequest { encoded_text: text })
            .await
    }
}
