//! Client side of the language identification service: the HTTP classifier,
//! the submission state machine driven by the UI, and client settings.

pub mod classifier;
pub mod config;
pub mod controller;
pub mod error;
pub mod types;

pub use classifier::{Classifier, HttpClassifier, MissingClassifier};
pub use config::{load_settings, ClientSettings};
pub use controller::{
    ApplyOutcome, ClassificationController, ClassifyRequest, Phase, ResubmitPolicy,
    SubmissionState, GENERIC_FAILURE_MESSAGE,
};
pub use error::{ClassifyError, ClassifyErrorCategory};
pub use types::{format_confidence, Classification};
