//! UI layer for desktop GUI: app shell, panels, and the family colour theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::LanguageClassifierApp;
