//! Configuration Module
//!
//! Loads the frontend settings: logging, window size and page layout.

mod app_config;

pub use app_config::{AppConfig, LoadedConfig};
