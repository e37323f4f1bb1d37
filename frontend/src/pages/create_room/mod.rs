//! Room Creation Page
//!
//! Arranges the room creation form and the room list side by side. The page
//! owns no state of its own: it resolves a [`PageLayout`] for the current
//! viewport and hands each collaborator its cell. Nothing flows between the
//! two regions through here.

mod layout;

pub use layout::{LayoutConfig, PageLayout, RegionLayout, Slot};

use crate::components::Collaborator;
use egui::{Rect, pos2, vec2};

/// Two-column page hosting a creation form (left) and a room list (right).
pub struct RoomCreationPage<F, L> {
    form: F,
    list: L,
    config: LayoutConfig,
}

impl<F, L> RoomCreationPage<F, L>
where
    F: Collaborator,
    L: Collaborator,
{
    pub fn new(form: F, list: L) -> Self {
        Self {
            form,
            list,
            config: LayoutConfig::default(),
        }
    }

    /// Replaces the sizing constants.
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Geometry of the page for `viewport`. Pure: same input, same output.
    pub fn layout(&self, viewport: Rect) -> PageLayout {
        PageLayout::compute(viewport, &self.config)
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Forwards mount to both collaborators, form first.
    pub fn mount(&mut self) {
        self.form.on_mount();
        self.list.on_mount();
    }

    /// Forwards unmount to both collaborators, form first.
    pub fn unmount(&mut self) {
        self.form.on_unmount();
        self.list.on_unmount();
    }

    /// Renders the page as the central panel of `ctx`, scrolling vertically
    /// when a region outgrows the window.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_inside(ui);
                    });
            });
    }

    /// Renders the page into `ui` and returns the layout it used.
    pub fn show_inside(&mut self, ui: &mut egui::Ui) -> PageLayout {
        let layout = self.layout(viewport_of(ui));

        let form_used = render_region(ui, layout.region(Slot::CreateRoomForm), &mut self.form);
        let list_used = render_region(ui, layout.region(Slot::RoomList), &mut self.list);

        // Claim the tallest region plus bottom padding so a surrounding
        // scroll area sees the full content height.
        let content_bottom = form_used.bottom().max(list_used.bottom()) + self.config.padding_y;
        let bottom = content_bottom.max(layout.container.bottom());
        ui.allocate_rect(
            Rect::from_min_max(layout.container.min, pos2(layout.container.right(), bottom)),
            egui::Sense::hover(),
        );

        layout
    }
}

/// Visible part of `ui`. Scroll areas hand out unbounded max rects, so the
/// clip rect bounds whichever axis is infinite.
fn viewport_of(ui: &egui::Ui) -> Rect {
    let max = ui.max_rect();
    let clip = ui.clip_rect();
    let width = if max.width().is_finite() { max.width() } else { clip.width() };
    let height = if max.height().is_finite() { max.height() } else { clip.height() };
    Rect::from_min_size(max.min, vec2(width, height))
}

/// Draws one collaborator into its cell and returns the area it used.
fn render_region(
    ui: &mut egui::Ui,
    region: &RegionLayout,
    collaborator: &mut impl Collaborator,
) -> Rect {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .id_salt(region.slot.label())
            .max_rect(region.rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    collaborator.show(&mut child);
    child.min_rect()
}
