use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, pipeline_error_response};
use crate::application::ports::LanguageAiClient;
use crate::application::services::{AnalysisResponse, TextAnalysisRequest};
use crate::domain::{EntitiesResult, SentimentResult};
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub content: String,
    pub language: String,
}

#[derive(Serialize)]
pub struct AnalyzeTextResponse {
    pub id: String,
    pub content: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesResult>,
}

impl From<AnalysisResponse> for AnalyzeTextResponse {
    fn from(response: AnalysisResponse) -> Self {
        Self {
            id: response.id.to_string(),
            content: response.content,
            language: response.language,
            sentiment: response.sentiment,
            entities: response.entities,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_text_handler<C>(
    State(state): State<AppState<C>>,
    request: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> impl IntoResponse
where
    C: LanguageAiClient + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!(status = rejection.status().as_u16(), error = %rejection, "Rejected analysis body");
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    tracing::debug!(
        language = %request.language,
        content = %sanitize_text(&request.content),
        "Text analysis requested"
    );

    let request = TextAnalysisRequest {
        content: request.content,
        language: request.language,
    };

    match state.pipeline.analyze_text(request).await {
        Ok(response) => {
            tracing::info!(
                id = %response.id,
                has_sentiment = response.sentiment.is_some(),
                has_entities = response.entities.is_some(),
                "Text analysis completed"
            );
            (StatusCode::OK, Json(AnalyzeTextResponse::from(response))).into_response()
        }
        Err(e) => pipeline_error_response(&e),
    }
}
