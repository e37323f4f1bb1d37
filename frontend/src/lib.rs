//! Room Creation Frontend
//!
//! Native egui application hosting the room creation page: a creation form
//! and a room list laid out side by side.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;

pub use app::App;
pub use config::{AppConfig, LoadedConfig};
pub use error::{AppError, Result};
pub use pages::RoomCreationPage;
