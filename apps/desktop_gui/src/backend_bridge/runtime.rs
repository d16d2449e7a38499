//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::Classifier;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker. Commands are read until the UI drops its
/// sender; each classification runs as its own task so a slow request never
/// holds up a newer one.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    classifier: Arc<dyn Classifier>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

        for cmd in cmd_rx.iter() {
            match cmd {
                BackendCommand::Classify { request_id, text } => {
                    let classifier = Arc::clone(&classifier);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        let outcome = classifier.classify(&text).await;
                        let finished = UiEvent::ClassificationFinished {
                            request_id,
                            outcome,
                        };
                        if let Err(err) = ui_tx.try_send(finished) {
                            tracing::debug!(%request_id, "dropping classification result: {err}");
                        }
                    });
                }
            }
        }

        tracing::debug!("ui command queue closed; backend worker exiting");
    });
}
