use std::time::Duration;

use client_core::ResubmitPolicy;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::AppModel,
};
use crate::ui::{panels, theme};

pub struct LanguageClassifierApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    endpoint: String,
    theme_applied: bool,
}

impl LanguageClassifierApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        endpoint: String,
        policy: ResubmitPolicy,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: AppModel::new(policy),
            endpoint,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.reduce(event);
        }
    }

    fn try_submit(&mut self) {
        let Some(cmd) = self.model.submit() else {
            return;
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.model.submit_not_queued(err);
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.model.status_banner.clone() else {
            return;
        };
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(254, 226, 226))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(252, 165, 165)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(theme::ERROR_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.model.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🌍 Language Classifier").strong().size(18.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.endpoint).weak());
                });
            });
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.model.status).weak());
            });
        });
    }
}

impl eframe::App for LanguageClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(theme::light_visuals());
            self.theme_applied = true;
        }

        self.process_ui_events();
        self.show_top_bar(ctx);

        let mut submit = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(960.0);
                    self.show_status_banner(ui);
                    submit = panels::show_classify_section(ui, &mut self.model);
                    ui.add_space(24.0);
                    panels::show_catalogue_section(ui, &mut self.model);
                });
        });
        if submit {
            self.try_submit();
        }

        panels::show_result_window(ctx, &mut self.model);

        if self.model.controller.state().phase().is_pending() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
