use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    format_confidence, load_settings, ClassificationController, HttpClassifier, Phase,
};
use serde_json::json;
use shared::catalog::{FamilySelection, LanguageRecord, TaxonomyStore};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(
    name = "langid",
    about = "Identify the language of a text and browse supported languages"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send text to the classification service.
    Classify {
        /// Overrides the configured prediction endpoint.
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        json: bool,
        /// Words are joined with single spaces; empty text is sent as-is.
        text: Vec<String>,
    },
    /// List supported languages, optionally for one family.
    Languages {
        #[arg(long, default_value = "All")]
        family: String,
        #[arg(long)]
        json: bool,
    },
    /// List language families.
    Families,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match args.command {
        Command::Classify {
            endpoint,
            json,
            text,
        } => classify(endpoint, json, text.join(" ")).await,
        Command::Languages { family, json } => {
            list_languages(&FamilySelection::parse(&family), json)
        }
        Command::Families => {
            for family in TaxonomyStore::builtin().families() {
                println!("{family}");
            }
            Ok(())
        }
    }
}

async fn classify(endpoint: Option<String>, as_json: bool, text: String) -> Result<()> {
    let mut settings = load_settings();
    if let Some(endpoint) = endpoint {
        settings.endpoint = endpoint;
    }
    let classifier = HttpClassifier::from_settings(&settings)?;
    tracing::debug!(
        endpoint = %classifier.endpoint(),
        policy = %settings.resubmit_policy,
        "classifying from command line"
    );

    let mut controller = ClassificationController::new(settings.resubmit_policy);
    controller.set_input_text(text);
    controller.submit_with(&classifier).await;

    match controller.state().phase() {
        Phase::Succeeded(result) => {
            let matched = TaxonomyStore::builtin().resolve_prediction(&result.language);
            if as_json {
                let body = json!({
                    "language": result.language,
                    "confidence": result.confidence,
                    "catalog_entry": matched,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Language:   {}", result.language);
                println!("Confidence: {}", format_confidence(result.confidence));
                if let Some(record) = matched {
                    println!("Native:     {}", record.native);
                    println!("Family:     {}", record.family);
                }
            }
            Ok(())
        }
        Phase::Failed { message } => bail!("{message}"),
        other => bail!("classification ended in unexpected phase '{}'", other.name()),
    }
}

fn list_languages(selection: &FamilySelection, as_json: bool) -> Result<()> {
    let visible = TaxonomyStore::builtin().filter(selection);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }
    if visible.is_empty() {
        println!("No languages in family '{selection}'.");
    }
    for record in visible {
        println!("{}", render_language(record));
    }
    Ok(())
}

fn render_language(record: &LanguageRecord) -> String {
    format!(
        "{:>2}  {} ({}) [{}]: {}",
        record.id.0,
        record.name,
        record.native,
        record.family,
        record.characteristics.join("; ")
    )
}
