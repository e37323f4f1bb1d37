//! Application State
//!
//! The `App` owns the configuration, the logger and the hosted page. Pages
//! carry their own behavior, so the update loop only renders.

use crate::components::{Collaborator, Placeholder};
use crate::config::{AppConfig, LoadedConfig};
use crate::pages::RoomCreationPage;
use logging::Logger;

/// The page shipped with the binary: placeholder form and list.
pub type HostedPage = RoomCreationPage<Placeholder, Placeholder>;

/// Main application state
pub struct App {
    config: AppConfig,
    logger: Logger,
    page: HostedPage,
}

impl App {
    /// Builds the app from a loaded configuration and mounts the page.
    pub fn new(loaded: LoadedConfig, logger: Logger) -> Self {
        let page = RoomCreationPage::new(Placeholder::create_room_form(), Placeholder::room_list())
            .with_layout(loaded.config.layout);
        Self::with_page(loaded, logger, page)
    }

    /// Same as [`App::new`] with a caller-supplied page. The page keeps its
    /// own [`LayoutConfig`](crate::pages::LayoutConfig); the configured
    /// layout is only applied by [`App::new`].
    pub fn with_page(loaded: LoadedConfig, logger: Logger, mut page: HostedPage) -> Self {
        let LoadedConfig {
            config,
            source,
            ignored_keys,
        } = loaded;

        logger.info("[APP] Initializing application...");
        match &source {
            Some(path) => logger.info(&format!(
                "[APP] Configuration loaded from {}",
                path.display()
            )),
            None => logger.info("[APP] No configuration file found, using defaults"),
        }
        for key in &ignored_keys {
            logger.warn(&format!("[APP] Unknown configuration key '{}' ignored", key));
        }
        logger.debug(&format!(
            "[APP] Layout - max width: {}, padding: {}x{}, gap: {}",
            config.layout.max_content_width,
            config.layout.padding_x,
            config.layout.padding_y,
            config.layout.column_gap
        ));

        page.mount();
        logger.info(&format!(
            "[PAGE] Mounted room creation page: [{}] | [{}]",
            page.form().name(),
            page.list().name()
        ));

        Self {
            config,
            logger,
            page,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn page(&self) -> &HostedPage {
        &self.page
    }

    /// Draws one frame.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.page.show(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.page.unmount();
        self.logger.info("[PAGE] Room creation page unmounted");
        self.logger.info("[APP] Application shutting down...");
    }
}
