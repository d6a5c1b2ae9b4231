use std::fmt;

use serde::Serialize;
use uuid::Uuid;

const RANDOM_HEX_LEN: usize = 16;

/// Opaque per-request identifier. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    pub fn for_text() -> Self {
        Self::with_prefix("analysis")
    }

    pub fn for_audio() -> Self {
        Self::with_prefix("audio")
    }

    pub fn from_provider(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn with_prefix(prefix: &str) -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("{}_{}", prefix, &hex[..RANDOM_HEX_LEN]))
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
