use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::language_registry::{self, SPEECH_LANGUAGES, TRANSLATION_LANGUAGES};

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<&'static str>,
    pub language_codes: BTreeMap<&'static str, &'static str>,
    pub stt_language_codes: BTreeMap<&'static str, &'static str>,
}

pub async fn languages_handler() -> impl IntoResponse {
    let language_codes = TRANSLATION_LANGUAGES
        .iter()
        .map(|(name, code)| (*name, code.as_str()))
        .collect();
    let stt_language_codes = SPEECH_LANGUAGES
        .iter()
        .map(|(name, code)| (*name, code.as_str()))
        .collect();

    (
        StatusCode::OK,
        Json(LanguagesResponse {
            languages: language_registry::translation_language_names(),
            language_codes,
            stt_language_codes,
        }),
    )
}
