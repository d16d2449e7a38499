//! GUI model and the transitions applied to it by user actions and backend
//! events. Rendering reads this model; nothing here touches egui.

use client_core::{
    ApplyOutcome, ClassificationController, ClassifyError, Phase, ResubmitPolicy,
};
use shared::catalog::{FamilySelection, LanguageRecord, TaxonomyStore};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiEvent};

pub const SUBMIT_LABEL: &str = "Classify Language";
pub const SUBMIT_BUSY_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
}

pub struct AppModel {
    pub controller: ClassificationController,
    pub selection: FamilySelection,
    pub status: String,
    pub status_banner: Option<StatusBanner>,
    pub result_window_open: bool,
}

impl AppModel {
    pub fn new(policy: ResubmitPolicy) -> Self {
        Self {
            controller: ClassificationController::new(policy),
            selection: FamilySelection::All,
            status: "Starting backend worker...".to_string(),
            status_banner: None,
            result_window_open: false,
        }
    }

    /// Classify button. Returns the command the UI must queue, if any.
    pub fn submit(&mut self) -> Option<BackendCommand> {
        let request = self.controller.submit()?;
        self.result_window_open = true;
        self.status = "Classifying...".to_string();
        Some(BackendCommand::Classify {
            request_id: request.id,
            text: request.text,
        })
    }

    /// The command for the latest submission never reached the backend; fail
    /// it so the controller does not stay pending.
    pub fn submit_not_queued(&mut self, err: UiError) {
        if let Some(request_id) = self.controller.in_flight() {
            self.controller.apply(
                request_id,
                Err(ClassifyError::Unavailable(err.message().to_string())),
            );
        }
        self.show_error(err);
    }

    pub fn reduce(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Error(err) => self.show_error(err),
            UiEvent::ClassificationFinished {
                request_id,
                outcome,
            } => {
                if self.controller.apply(request_id, outcome) == ApplyOutcome::Stale {
                    return;
                }
                self.status = match self.controller.state().phase() {
                    Phase::Succeeded(result) => format!("Detected {}", result.language),
                    Phase::Failed { message } => message.clone(),
                    Phase::Idle | Phase::Pending => self.status.clone(),
                };
            }
        }
    }

    pub fn select_family(&mut self, selection: FamilySelection) {
        self.selection = selection;
    }

    pub fn visible_languages(&self) -> Vec<&'static LanguageRecord> {
        TaxonomyStore::builtin().filter(&self.selection)
    }

    /// Catalogue entry for the current prediction, when the label is known.
    pub fn matched_language(&self) -> Option<&'static LanguageRecord> {
        let language = self.controller.state().result_language()?;
        TaxonomyStore::builtin().resolve_prediction(language)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.controller.state().phase().is_pending() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::error!(context = ?err.context(), "{}", err.message());
        self.status = format!("{} error: {}", err_label(err.category()), err.message());
        self.status_banner = Some(StatusBanner {
            message: self.status.clone(),
        });
    }
}
