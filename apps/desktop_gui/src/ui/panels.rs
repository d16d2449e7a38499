use client_core::{format_confidence, Phase};
use eframe::egui;
use shared::catalog::{FamilySelection, LanguageRecord, TaxonomyStore};

use crate::controller::reducer::AppModel;
use crate::ui::theme::{self, card_style};

const CARD_COLUMNS: usize = 3;

/// Text input plus classify button. Returns true when the user asked to
/// submit this frame.
pub fn show_classify_section(ui: &mut egui::Ui, model: &mut AppModel) -> bool {
    ui.heading(egui::RichText::new("Language Classification Tool").color(theme::HEADING_TEXT));
    ui.add_space(8.0);

    let mut submit = false;
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(191, 219, 254)))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Enter Text to Classify").strong().size(18.0));
            ui.add_space(6.0);

            let editor = ui.add(
                egui::TextEdit::multiline(model.controller.input_text_mut())
                    .hint_text("Enter text to identify its language...")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
            let ctrl_enter = editor.has_focus()
                && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

            ui.add_space(6.0);
            let button = egui::Button::new(
                egui::RichText::new(model.submit_label())
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .min_size(egui::vec2(180.0, 34.0));
            let enabled = model.controller.is_submit_enabled();
            let clicked = ui.add_enabled(enabled, button).clicked();
            submit = clicked || (enabled && ctrl_enter);
        });
    submit
}

pub fn show_result_window(ctx: &egui::Context, model: &mut AppModel) {
    if !model.result_window_open {
        return;
    }

    let mut open = model.result_window_open;
    let matched = model.matched_language();
    egui::Window::new("Classification Result")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(420.0)
        .show(ctx, |ui| {
            match model.controller.state().phase() {
                Phase::Idle => {
                    ui.label("Nothing classified yet.");
                }
                Phase::Pending => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Classifying...");
                    });
                }
                Phase::Succeeded(result) => {
                    result_row(ui, "Language:", &result.language);
                    result_row(ui, "Confidence:", &format_confidence(result.confidence));
                    if let Some(record) = matched {
                        ui.add_space(8.0);
                        ui.separator();
                        language_card(ui, record);
                    }
                }
                Phase::Failed { message } => {
                    ui.label(
                        egui::RichText::new(message)
                            .color(theme::ERROR_TEXT)
                            .strong(),
                    );
                }
            }
        });
    model.result_window_open = open;
}

fn result_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong().size(16.0));
        ui.label(egui::RichText::new(value).size(16.0));
    });
}

/// Family tabs and the card grid for the current selection.
pub fn show_catalogue_section(ui: &mut egui::Ui, model: &mut AppModel) {
    let store = TaxonomyStore::builtin();

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Language Database").color(theme::HEADING_TEXT));
    });
    ui.add_space(8.0);

    let mut selection = model.selection.clone();
    ui.horizontal_wrapped(|ui| {
        for family in store.families() {
            let value = FamilySelection::parse(family);
            let count = store.count_for_family(&value);
            ui.selectable_value(&mut selection, value, format!("{family} ({count})"));
        }
    });
    if selection != model.selection {
        tracing::debug!(family = %selection, "family tab selected");
        model.select_family(selection);
    }
    ui.add_space(10.0);

    let visible = model.visible_languages();
    if visible.is_empty() {
        ui.weak(format!("No languages in family '{}'.", model.selection));
        return;
    }

    for row in visible.chunks(CARD_COLUMNS) {
        ui.columns(CARD_COLUMNS, |columns| {
            for (column, record) in columns.iter_mut().zip(row) {
                language_card(column, record);
            }
        });
        ui.add_space(8.0);
    }
}

pub fn language_card(ui: &mut egui::Ui, record: &LanguageRecord) {
    let style = card_style(record.family);
    egui::Frame::new()
        .fill(style.fill)
        .stroke(style.stroke)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(record.name)
                            .strong()
                            .size(17.0)
                            .color(theme::HEADING_TEXT),
                    );
                    ui.label(egui::RichText::new(record.native).color(theme::BODY_TEXT));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    family_badge(ui, record.family, style.badge);
                });
            });
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Key Characteristics:").strong());
            for characteristic in record.characteristics {
                ui.label(
                    egui::RichText::new(format!("• {characteristic}"))
                        .small()
                        .color(theme::BODY_TEXT),
                );
            }
        });
}

fn family_badge(ui: &mut egui::Ui, family: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(family)
                    .small()
                    .strong()
                    .color(egui::Color32::WHITE),
            );
        });
}
