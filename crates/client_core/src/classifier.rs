use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ServiceErrorBody,
    protocol::{PredictRequest, PredictResponse},
};
use tracing::debug;
use url::Url;

use crate::{
    config::{validate_endpoint, ClientSettings},
    error::ClassifyError,
    types::Classification,
};

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

/// Talks to the prediction endpoint over HTTP: `POST {"text": ...}` and
/// expects `{"language": ..., "confidence": ...}` back.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: Client,
    endpoint: Url,
}

impl HttpClassifier {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let endpoint = validate_endpoint(&settings.endpoint)?;
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .context("failed to build classification HTTP client")?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        debug!(
            endpoint = %self.endpoint,
            chars = text.chars().count(),
            "posting classification request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&PredictRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Status {
                status: status.as_u16(),
                detail: ServiceErrorBody::describe(&body),
            });
        }

        let bytes = response.bytes().await?;
        let payload: PredictResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ClassifyError::Contract(err.to_string()))?;
        Classification::from_response(payload)
    }
}

/// Stand-in used when no usable endpoint is configured; every request fails
/// so the UI still starts and reports the problem per submission.
pub struct MissingClassifier {
    reason: String,
}

impl MissingClassifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Classifier for MissingClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification, ClassifyError> {
        Err(ClassifyError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
