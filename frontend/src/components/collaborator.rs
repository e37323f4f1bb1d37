//! The seam between a page and the regions it arranges.
//!
//! A page only ever asks a collaborator to draw itself into the rectangle it
//! was given. Whatever state, I/O or validation a collaborator needs stays
//! behind this trait.

/// A self-contained region a page can render without passing it anything.
pub trait Collaborator {
    /// Draws the region into `ui`, whose max rect is the allotted cell.
    fn show(&mut self, ui: &mut egui::Ui);

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once when the hosting page is mounted.
    fn on_mount(&mut self) {}

    /// Called once when the hosting page is unmounted.
    fn on_unmount(&mut self) {}
}

impl<F> Collaborator for F
where
    F: FnMut(&mut egui::Ui),
{
    fn show(&mut self, ui: &mut egui::Ui) {
        self(ui)
    }
}

/// A region that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Collaborator for Empty {
    fn show(&mut self, _ui: &mut egui::Ui) {}

    fn name(&self) -> &str {
        "empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_once(collaborator: &mut impl Collaborator) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| collaborator.show(ui));
        });
    }

    #[test]
    fn test_closure_is_a_collaborator() {
        let mut calls = 0;
        let mut region = |ui: &mut egui::Ui| {
            calls += 1;
            ui.label("list");
        };
        render_once(&mut region);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_empty_renders_nothing() {
        let mut empty = Empty;
        render_once(&mut empty);
        assert_eq!(empty.name(), "empty");
    }

    #[test]
    fn test_default_name_is_type_name() {
        struct Sidebar;
        impl Collaborator for Sidebar {
            fn show(&mut self, _ui: &mut egui::Ui) {}
        }
        assert!(Sidebar.name().ends_with("Sidebar"));
    }
}
