use serde::{Deserialize, Serialize};

/// Body the classification service sends alongside a non-success status,
/// e.g. `{"error": "No text provided"}` with HTTP 400.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ServiceErrorBody {
    /// Best-effort decode used for diagnostics only; anything that is not the
    /// expected shape is reported as the raw (truncated) body text.
    pub fn describe(raw: &str) -> String {
        match serde_json::from_str::<ServiceErrorBody>(raw) {
            Ok(body) => body.error,
            Err(_) => raw.chars().take(MAX_RAW_DETAIL_CHARS).collect(),
        }
    }
}

const MAX_RAW_DETAIL_CHARS: usize = 200;
