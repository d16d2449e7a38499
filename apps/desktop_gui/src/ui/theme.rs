use eframe::egui;
use shared::catalog::{badge_color_for_family, card_color_for_family, ColorToken};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const HEADING_TEXT: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

pub fn token_color(token: ColorToken) -> egui::Color32 {
    let [r, g, b] = token.rgb();
    egui::Color32::from_rgb(r, g, b)
}

pub struct CardStyle {
    pub fill: egui::Color32,
    pub stroke: egui::Stroke,
    pub badge: egui::Color32,
}

pub fn card_style(family: &str) -> CardStyle {
    let card = card_color_for_family(family);
    CardStyle {
        fill: token_color(card.fill),
        stroke: egui::Stroke::new(1.0, token_color(card.border)),
        badge: token_color(badge_color_for_family(family)),
    }
}

pub fn light_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    visuals.hyperlink_color = ACCENT;
    visuals
}
