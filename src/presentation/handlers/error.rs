use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::EmptyContent
        | PipelineError::EmptyAudio
        | PipelineError::UnsupportedLanguage { .. } => StatusCode::BAD_REQUEST,
        PipelineError::ProviderNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        PipelineError::Transcription(_) | PipelineError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn pipeline_error_response(error: &PipelineError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Analysis request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Analysis request rejected");
    }
    error_response(status, error.to_string())
}

/// Turns a handler panic into a 500 carrying the panic message.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown error".to_string()
    };

    tracing::error!(panic = %message, "Request handler panicked");
    pipeline_error_response(&PipelineError::Unexpected(message))
}
