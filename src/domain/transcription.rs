pub const DEFAULT_TRANSCRIPTION_STATUS: &str = "COMPLETED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub id: Option<String>,
    pub text: String,
    pub language_code: String,
    pub status: String,
}

impl Transcription {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
