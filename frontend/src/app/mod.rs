//! Application Module
//!
//! Hosts the room creation page inside an eframe window.
//!
//! # Flow
//!
//! ```text
//! main --> AppConfig::load --> Logger --> App::new --> page.mount()
//! eframe update --> App::render --> RoomCreationPage::show
//! eframe exit   --> page.unmount()
//! ```

mod state;

pub use state::{App, HostedPage};
