use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or parsing a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file at the given location(s).
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),

    /// A line could not be interpreted.
    Parse { line: usize, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::Parse { line, message } => {
                write!(f, "Invalid configuration at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
