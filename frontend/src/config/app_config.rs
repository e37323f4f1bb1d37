//! Application Configuration
//!
//! Reads `app.conf` through `config_loader` and maps its entries onto
//! [`AppConfig`]. Missing files fall back to defaults; malformed values are
//! errors; unknown keys are collected so the caller can log them.

use crate::pages::LayoutConfig;
use config_loader::{ConfigEntry, ConfigError, parse_key_values};
use logging::LogLevel;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Mirror log lines to stdout
    pub console_logging: bool,
    /// Initial window size in points, `[width, height]`
    pub window_size: [f32; 2],
    /// Sizing constants of the room creation page
    pub layout: LayoutConfig,
}

/// A configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// File the values were read from, `None` when running on defaults.
    pub source: Option<PathBuf>,
    /// Keys present in the file but not understood.
    pub ignored_keys: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("room_creation.log"),
            log_level: LogLevel::Info,
            console_logging: false,
            window_size: [1280.0, 720.0],
            layout: LayoutConfig::default(),
        }
    }
}

impl AppConfig {
    /// File name searched by [`AppConfig::load`].
    pub const FILE_NAME: &'static str = "app.conf";

    /// Builds a configuration from `key=value` text.
    ///
    /// Format:
    /// ```text
    /// log_path=room_creation.log
    /// log_level=Info
    /// max_content_width=896
    /// ```
    ///
    /// # Returns
    /// The configuration and the list of keys that were ignored.
    pub fn parse(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        for entry in parse_key_values(content)? {
            match entry.key.as_str() {
                "log_path" => config.log_path = PathBuf::from(&entry.value),
                "log_level" => {
                    // FromStr for LogLevel never fails
                    config.log_level = entry.value.parse().unwrap_or_default();
                }
                "console_logging" => config.console_logging = parse_bool(&entry)?,
                "window_width" => config.window_size[0] = parse_positive(&entry)?,
                "window_height" => config.window_size[1] = parse_positive(&entry)?,
                "max_content_width" => config.layout.max_content_width = parse_length(&entry)?,
                "padding_x" => config.layout.padding_x = parse_length(&entry)?,
                "padding_y" => config.layout.padding_y = parse_length(&entry)?,
                "column_gap" => config.layout.column_gap = parse_length(&entry)?,
                _ => ignored.push(entry.key),
            }
        }

        Ok((config, ignored))
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let content = config_loader::load_config_file(path)?;
        let (config, ignored_keys) = Self::parse(&content)?;
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            ignored_keys,
        })
    }

    /// Searches the standard locations for `app.conf`.
    ///
    /// Falls back to the default configuration if no file is found. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load() -> Result<LoadedConfig, ConfigError> {
        match config_loader::find_config_file(Self::FILE_NAME) {
            Ok(path) => Self::load_from_file(&path),
            Err(ConfigError::FileNotFound(_)) => Ok(LoadedConfig {
                config: Self::default(),
                source: None,
                ignored_keys: Vec::new(),
            }),
            Err(e) => Err(e),
        }
    }
}

fn invalid(entry: &ConfigEntry, expected: &str) -> ConfigError {
    ConfigError::Parse {
        line: entry.line,
        message: format!(
            "'{}' must be {}, found '{}'",
            entry.key, expected, entry.value
        ),
    }
}

fn parse_bool(entry: &ConfigEntry) -> Result<bool, ConfigError> {
    match entry.value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(entry, "a boolean")),
    }
}

/// Finite, non-negative length in points.
fn parse_length(entry: &ConfigEntry) -> Result<f32, ConfigError> {
    entry
        .value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| invalid(entry, "a non-negative number"))
}

fn parse_positive(entry: &ConfigEntry) -> Result<f32, ConfigError> {
    match parse_length(entry)? {
        value if value > 0.0 => Ok(value),
        _ => Err(invalid(entry, "a positive number")),
    }
}
