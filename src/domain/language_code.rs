use std::fmt;

use serde::Serialize;

/// Provider language tag for the translate capability (ISO 639-3 + script, e.g. `zul_Latn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TranslationCode(&'static str);

impl TranslationCode {
    pub const ENGLISH: Self = Self("eng_Latn");

    pub(crate) const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TranslationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Provider language code for the transcribe capability (ISO 639, e.g. `zul`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SpeechCode(&'static str);

impl SpeechCode {
    pub const ENGLISH: Self = Self("eng");

    pub(crate) const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SpeechCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
