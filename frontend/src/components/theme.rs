//! Dark slate palette shared by every component.

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
pub const SURFACE: Color32 = Color32::from_rgb(30, 41, 59);
pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_SUBTLE: Color32 = Color32::from_rgb(107, 114, 128);

/// Applies the dark theme and slate fills to a context.
pub fn apply(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Dark);

    let mut style = (*ctx.style()).clone();
    style.visuals.window_fill = BACKGROUND;
    style.visuals.panel_fill = BACKGROUND;
    ctx.set_style(style);
}
