//! EmptyState Component
//!
//! A centered icon, message and optional description.

use super::theme;
use egui::{RichText, Ui};

/// EmptyState component for regions with nothing to show yet
pub struct EmptyState {
    icon: String,
    message: String,
    description: Option<String>,
    icon_size: f32,
}

impl EmptyState {
    /// Creates a new EmptyState with an icon and message
    pub fn new(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            description: None,
            icon_size: 40.0,
        }
    }

    /// Adds an optional description text below the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn show(self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new(&self.icon).size(self.icon_size));
            ui.add_space(12.0);
            ui.label(RichText::new(&self.message).size(16.0).color(theme::TEXT_MUTED));

            if let Some(desc) = self.description {
                ui.add_space(6.0);
                ui.label(RichText::new(desc).size(13.0).color(theme::TEXT_SUBTLE));
            }

            ui.add_space(24.0);
        });
    }
}
