use serde::{Deserialize, Serialize};

/// `POST /predict` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictRequest {
    pub text: String,
}

/// `POST /predict` success body. The service also sends `"status": "success"`
/// which carries no information beyond the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub language: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
