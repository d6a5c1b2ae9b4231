mod analyze_audio;
mod analyze_text;
pub mod error;
mod health;
mod languages;

pub use analyze_audio::{AnalyzeAudioResponse, analyze_audio_handler};
pub use analyze_text::{AnalyzeTextRequest, AnalyzeTextResponse, analyze_text_handler};
pub use error::ErrorResponse;
pub use health::{health_handler, root_handler};
pub use languages::{LanguagesResponse, languages_handler};
