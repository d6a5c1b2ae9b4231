mod analysis_id;
mod audio_upload;
mod entity;
mod language_code;
pub mod language_registry;
mod sentiment;
mod transcription;

pub use analysis_id::AnalysisId;
pub use audio_upload::{AudioUpload, DEFAULT_AUDIO_MIME};
pub use entity::{EntitiesResult, Entity};
pub use language_code::{SpeechCode, TranslationCode};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use transcription::{DEFAULT_TRANSCRIPTION_STATUS, Transcription};
