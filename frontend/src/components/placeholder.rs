//! Placeholder Component
//!
//! Stands in for a collaborator the host application has not wired yet. It
//! renders a titled card with an empty state and holds no data.

use super::{Card, Collaborator, EmptyState};

/// Titled card with a static empty-state message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    title: String,
    icon: String,
    message: String,
    description: Option<String>,
}

impl Placeholder {
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            message: message.into(),
            description: None,
        }
    }

    /// Adds a secondary line under the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Stand-in for the room creation form
    pub fn create_room_form() -> Self {
        Self::new("Create room", "➕", "Room creation form")
            .description("Provided by the room service integration")
    }

    /// Stand-in for the room list
    pub fn room_list() -> Self {
        Self::new("Rooms", "🏠", "Room list")
            .description("Provided by the room service integration")
    }
}

impl Collaborator for Placeholder {
    fn show(&mut self, ui: &mut egui::Ui) {
        Card::new().title(self.title.as_str()).show(ui, |ui| {
            let mut state = EmptyState::new(self.icon.as_str(), self.message.as_str());
            if let Some(desc) = &self.description {
                state = state.description(desc.as_str());
            }
            state.show(ui);
        });
    }

    fn name(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_distinct_titles() {
        let form = Placeholder::create_room_form();
        let list = Placeholder::room_list();
        assert_eq!(form.name(), "Create room");
        assert_eq!(list.name(), "Rooms");
        assert_ne!(form, list);
    }

    #[test]
    fn test_placeholder_renders_inside_its_cell() {
        let ctx = egui::Context::default();
        let cell = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(300.0, 500.0));
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        };

        let mut used = None;
        let mut placeholder = Placeholder::room_list();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let mut child = ui.new_child(egui::UiBuilder::new().max_rect(cell));
                    placeholder.show(&mut child);
                    used = Some(child.min_rect());
                });
        });

        let used = used.unwrap();
        assert_eq!(used.left(), cell.left());
        assert_eq!(used.top(), cell.top());
        assert!(used.right() <= cell.right() + 0.5);
        assert!(used.height() > 0.0);
    }
}
