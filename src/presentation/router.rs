use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LanguageAiClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::error::panic_response;
use crate::presentation::handlers::{
    analyze_audio_handler, analyze_text_handler, health_handler, languages_handler, root_handler,
};
use crate::presentation::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: LanguageAiClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any)
        .max_age(CORS_MAX_AGE);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.settings.max_upload_bytes();

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/analyze-text", post(analyze_text_handler::<C>))
        .route("/api/analyze-audio", post(analyze_audio_handler::<C>))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
