use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, Classifier, HttpClassifier, MissingClassifier};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Parser, Debug)]
#[command(name = "langid-gui", about = "Desktop client for the language classification service")]
struct Args {
    /// Overrides the configured prediction endpoint.
    #[arg(long)]
    endpoint: Option<String>,
}

fn build_classifier(settings: &client_core::ClientSettings) -> Arc<dyn Classifier> {
    match HttpClassifier::from_settings(settings) {
        Ok(classifier) => Arc::new(classifier),
        Err(err) => {
            tracing::error!("classification endpoint unusable: {err:#}");
            Arc::new(MissingClassifier::new(format!("{err:#}")))
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    tracing::info!(
        endpoint = %settings.endpoint,
        policy = %settings.resubmit_policy,
        "starting language classifier"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, build_classifier(&settings));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Language Classifier")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    let endpoint = settings.endpoint.clone();
    let policy = settings.resubmit_policy;
    eframe::run_native(
        "Language Classifier",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::LanguageClassifierApp::new(
                cmd_tx, ui_rx, endpoint, policy,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn unusable_endpoint_falls_back_to_missing_classifier() {
        let settings = client_core::ClientSettings {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        let classifier = build_classifier(&settings);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        let outcome = runtime.block_on(classifier.classify("hallo"));
        assert!(outcome.is_err());
    }
}
