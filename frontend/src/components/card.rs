//! Card Component
//!
//! A rounded, shadowed surface with an optional heading.

use super::theme;
use egui::{Color32, RichText};

/// A reusable card that fills the width it is given
pub struct Card {
    title: Option<String>,
}

impl Card {
    /// Creates a new card with default settings
    pub fn new() -> Self {
        Self { title: None }
    }

    /// Adds a heading rendered above the card contents
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders the card with custom content, stretched to the available width
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        egui::Frame::new()
            .fill(theme::SURFACE)
            .corner_radius(12.0)
            .inner_margin(20.0)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .shadow(egui::epaint::Shadow {
                offset: [0, 4],
                blur: 24,
                spread: 0,
                color: Color32::from_black_alpha(40),
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width().max(0.0));
                if let Some(title) = self.title {
                    ui.label(RichText::new(title).size(22.0).strong().color(theme::ACCENT));
                    ui.add_space(12.0);
                }
                add_contents(ui)
            })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
