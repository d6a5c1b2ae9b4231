use bytes::Bytes;

pub const DEFAULT_AUDIO_MIME: &str = "audio/wav";
const DEFAULT_AUDIO_FILENAME: &str = "audio.wav";

/// Audio received from a caller, kept in memory for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(filename: Option<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            filename: filename
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AUDIO_FILENAME.to_string()),
            content_type: content_type
                .filter(|mime| mime.starts_with("audio/"))
                .unwrap_or_else(|| DEFAULT_AUDIO_MIME.to_string()),
            data,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
