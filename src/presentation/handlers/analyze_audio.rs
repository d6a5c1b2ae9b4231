use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::{error_response, pipeline_error_response};
use crate::application::ports::LanguageAiClient;
use crate::application::services::{AudioAnalysisRequest, TranscriptionResponse};
use crate::domain::{AudioUpload, EntitiesResult, SentimentResult};
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const LANGUAGE_FIELD: &str = "language";

#[derive(Serialize)]
pub struct AnalyzeAudioResponse {
    pub id: String,
    pub transcription_text: String,
    pub analysis: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesResult>,
}

impl From<TranscriptionResponse> for AnalyzeAudioResponse {
    fn from(response: TranscriptionResponse) -> Self {
        Self {
            id: response.id.to_string(),
            transcription_text: response.transcription_text,
            analysis: response.analysis,
            language: response.language,
            sentiment: response.sentiment,
            entities: response.entities,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_audio_handler<C>(
    State(state): State<AppState<C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    C: LanguageAiClient + 'static,
{
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(status = rejection.status().as_u16(), error = %rejection, "Rejected audio upload");
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    let request = match read_audio_form(multipart).await {
        Ok(request) => request,
        Err(response) => return response,
    };

    tracing::debug!(
        language = %request.language,
        filename = %request.audio.filename,
        bytes = request.audio.size_bytes(),
        "Audio analysis requested"
    );

    match state.pipeline.analyze_audio(request).await {
        Ok(response) => {
            tracing::info!(
                id = %response.id,
                transcript_chars = response.transcription_text.chars().count(),
                "Audio analysis completed"
            );
            (StatusCode::OK, Json(AnalyzeAudioResponse::from(response))).into_response()
        }
        Err(e) => pipeline_error_response(&e),
    }
}

async fn read_audio_form(mut multipart: Multipart) -> Result<AudioAnalysisRequest, Response> {
    let mut audio = None;
    let mut language = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                ));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    tracing::warn!(error = %e, "Failed to read audio bytes");
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read file: {}", e),
                    )
                })?;
                audio = Some(AudioUpload::new(filename, content_type, data));
            }
            Some(LANGUAGE_FIELD) => {
                let value = field.text().await.map_err(|e| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read language field: {}", e),
                    )
                })?;
                language = Some(value.trim().to_string());
            }
            _ => {}
        }
    }

    let language = language
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "Missing language field"))?;
    let audio =
        audio.ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "No audio file uploaded"))?;

    Ok(AudioAnalysisRequest { audio, language })
}
