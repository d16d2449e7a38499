//! Submission state machine behind the classify form.
//!
//! ```text
//! Idle --submit--> Pending --success--> Succeeded --submit--> Pending
//!                      \--failure--> Failed --submit--> Pending
//! ```
//!
//! The controller never performs I/O itself. `submit` hands back the request
//! to dispatch and the owner of the event loop feeds the outcome back through
//! `apply`. Every request carries a [`RequestId`]; only the most recently
//! issued one can change the state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::domain::RequestId;
use tracing::{debug, info, warn};

use crate::{
    classifier::Classifier,
    error::{ClassifyError, ParsePolicyError},
    types::Classification,
};

/// Shown for every failure; the cause only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error classifying language";

/// What `submit` does while a request is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResubmitPolicy {
    /// Issue a new request; responses to older ones are discarded.
    #[default]
    Supersede,
    /// Drop the submit and keep waiting for the pending request.
    IgnoreWhilePending,
}

impl FromStr for ResubmitPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "supersede" => Ok(Self::Supersede),
            "ignore_while_pending" | "ignore" => Ok(Self::IgnoreWhilePending),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for ResubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supersede => f.write_str("supersede"),
            Self::IgnoreWhilePending => f.write_str("ignore_while_pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded(Classification),
    Failed {
        message: String,
    },
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Pending => "pending",
            Phase::Succeeded(_) => "succeeded",
            Phase::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    input_text: String,
    phase: Phase,
}

impl SubmissionState {
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&Classification> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn result_language(&self) -> Option<&str> {
        self.result().map(|result| result.language.as_str())
    }

    pub fn result_confidence(&self) -> Option<f64> {
        self.result().map(|result| result.confidence)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// A request the caller must send to the classifier and later `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyRequest {
    pub id: RequestId,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The response belonged to a request that is no longer the latest one.
    Stale,
}

#[derive(Debug)]
pub struct ClassificationController {
    state: SubmissionState,
    policy: ResubmitPolicy,
    next_id: RequestId,
    in_flight: Option<RequestId>,
}

impl Default for ClassificationController {
    fn default() -> Self {
        Self::new(ResubmitPolicy::default())
    }
}

impl ClassificationController {
    pub fn new(policy: ResubmitPolicy) -> Self {
        Self {
            state: SubmissionState::default(),
            policy,
            next_id: RequestId::FIRST,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn policy(&self) -> ResubmitPolicy {
        self.policy
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Direct access to the text buffer for widgets that edit in place.
    pub fn input_text_mut(&mut self) -> &mut String {
        &mut self.state.input_text
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.state.phase.is_pending()
    }

    /// Clears the previous result, enters `Pending` and returns the request
    /// to dispatch. Returns `None` only under
    /// [`ResubmitPolicy::IgnoreWhilePending`] when a request is outstanding.
    pub fn submit(&mut self) -> Option<ClassifyRequest> {
        if self.state.phase.is_pending() && self.policy == ResubmitPolicy::IgnoreWhilePending {
            debug!(
                in_flight = ?self.in_flight.map(|id| id.0),
                "ignoring submit while a classification is pending"
            );
            return None;
        }

        let id = self.next_id;
        self.next_id = id.next();
        if let Some(previous) = self.in_flight.replace(id) {
            debug!(
                request_id = %id,
                superseded = %previous,
                "classification request superseded"
            );
        }
        self.state.phase = Phase::Pending;
        debug!(request_id = %id, "classification submitted");

        Some(ClassifyRequest {
            id,
            text: self.state.input_text.clone(),
        })
    }

    /// Reconciles the outcome of request `id` into the state. Outcomes for
    /// anything but the latest issued request are dropped.
    pub fn apply(
        &mut self,
        id: RequestId,
        outcome: Result<Classification, ClassifyError>,
    ) -> ApplyOutcome {
        if self.in_flight != Some(id) {
            debug!(
                request_id = %id,
                latest = ?self.in_flight.map(|latest| latest.0),
                "discarding stale classification response"
            );
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;

        self.state.phase = match outcome {
            Ok(result) => {
                info!(
                    request_id = %id,
                    language = %result.language,
                    confidence = result.confidence,
                    "classification succeeded"
                );
                Phase::Succeeded(result)
            }
            Err(err) => {
                warn!(
                    request_id = %id,
                    category = ?err.category(),
                    error = %err,
                    "classification failed"
                );
                Phase::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
        };
        ApplyOutcome::Applied
    }

    /// Submit, wait for `classifier` and apply the outcome in one go, for
    /// callers that handle a single submission at a time.
    pub async fn submit_with<C>(&mut self, classifier: &C) -> Option<ApplyOutcome>
    where
        C: Classifier + ?Sized,
    {
        let request = self.submit()?;
        let outcome = classifier.classify(&request.text).await;
        Some(self.apply(request.id, outcome))
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
