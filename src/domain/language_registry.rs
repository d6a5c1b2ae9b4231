//! Language names accepted by the API and the provider codes they resolve to.
//!
//! Translation and speech-to-text use separate code spaces on the provider side.
//! Names without direct provider support resolve to the English code of the
//! respective space.

use super::language_code::{SpeechCode, TranslationCode};

pub const ENGLISH: &str = "English";

pub static TRANSLATION_LANGUAGES: &[(&str, TranslationCode)] = &[
    (ENGLISH, TranslationCode::ENGLISH),
    ("isiZulu", TranslationCode::new("zul_Latn")),
    ("isiXhosa", TranslationCode::new("xho_Latn")),
    ("Kiswahili", TranslationCode::new("swh_Latn")),
    ("Afrikaans", TranslationCode::new("afr_Latn")),
    ("Southern Sotho", TranslationCode::new("sot_Latn")),
    ("Northern Sotho", TranslationCode::new("nso_Latn")),
    ("Swati", TranslationCode::new("ssw_Latn")),
    ("Tsonga", TranslationCode::new("tso_Latn")),
    ("Tswana", TranslationCode::new("tsn_Latn")),
    // no provider model yet
    ("Nigerian Pidgin", TranslationCode::ENGLISH),
    ("Portuguese", TranslationCode::ENGLISH),
];

pub static SPEECH_LANGUAGES: &[(&str, SpeechCode)] = &[
    (ENGLISH, SpeechCode::ENGLISH),
    ("isiZulu", SpeechCode::new("zul")),
    // transcription falls back to English for these
    ("isiXhosa", SpeechCode::ENGLISH),
    ("Kiswahili", SpeechCode::ENGLISH),
    ("Afrikaans", SpeechCode::new("afr")),
    ("Southern Sotho", SpeechCode::new("sot")),
    ("Nigerian Pidgin", SpeechCode::ENGLISH),
    ("Portuguese", SpeechCode::ENGLISH),
];

pub fn translation_code_of(name: &str) -> TranslationCode {
    lookup(TRANSLATION_LANGUAGES, name).unwrap_or(TranslationCode::ENGLISH)
}

pub fn speech_code_of(name: &str) -> SpeechCode {
    lookup(SPEECH_LANGUAGES, name).unwrap_or(SpeechCode::ENGLISH)
}

pub fn supports_translation(name: &str) -> bool {
    lookup(TRANSLATION_LANGUAGES, name).is_some()
}

pub fn supports_speech(name: &str) -> bool {
    lookup(SPEECH_LANGUAGES, name).is_some()
}

pub fn translation_language_names() -> Vec<&'static str> {
    TRANSLATION_LANGUAGES.iter().map(|(name, _)| *name).collect()
}

pub fn speech_language_names() -> Vec<&'static str> {
    SPEECH_LANGUAGES.iter().map(|(name, _)| *name).collect()
}

fn lookup<C: Copy>(table: &[(&str, C)], name: &str) -> Option<C> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, code)| *code)
}
