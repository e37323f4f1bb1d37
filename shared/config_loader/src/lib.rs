//! # Config Loader
//!
//! Locates, reads and tokenizes `key=value` configuration files.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("app.conf")?;
//!     let content = load_config_file(&path)?;
//!     for entry in parse_key_values(&content)? {
//!         println!("{} = {}", entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points directly at a configuration file.
pub const CONFIG_PATH_ENV: &str = "ROOM_CREATION_CONFIG";

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "room_creation";

/// A single `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// 1-based line number in the source text.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Reads a configuration file into a string.
///
/// The content is not interpreted; see [`parse_key_values`].
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Returns every location searched for `filename`, in priority order:
///
/// 1. `ROOM_CREATION_CONFIG` environment variable (if set)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
/// 4. `{platform config dir}/room_creation/{filename}`
pub fn candidate_paths(filename: &str) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from("./config").join(filename));
    paths.push(PathBuf::from("./").join(filename));

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR_NAME).join(filename));
    }

    paths
}

/// Picks the first existing path out of `candidates`.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Searches the standard locations for `filename`.
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    let candidates = candidate_paths(filename);

    first_existing(&candidates).ok_or_else(|| {
        let searched: Vec<String> = candidates
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        ConfigError::FileNotFound(format!(
            "'{}' (searched: {})",
            filename,
            searched.join(", ")
        ))
    })
}

/// Splits configuration text into `key=value` entries.
///
/// Blank lines and lines starting with `#` are skipped. Keys and values are
/// trimmed. A non-comment line without `=`, or with an empty key, is an
/// error.
pub fn parse_key_values(content: &str) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::Parse {
                line: index + 1,
                message: format!("expected 'key=value', found '{}'", line),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::Parse {
                line: index + 1,
                message: "empty key".to_string(),
            });
        }

        entries.push(ConfigEntry {
            line: index + 1,
            key: key.to_string(),
            value: value.trim().to_string(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config_file("/path/that/does/not/exist.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_find_nonexistent_file() {
        let result = find_config_file("file_that_definitely_does_not_exist_12345.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_candidate_paths_order() {
        let paths = candidate_paths("app.conf");
        let local = paths
            .iter()
            .position(|p| p == &PathBuf::from("./config").join("app.conf"))
            .unwrap();
        let cwd = paths
            .iter()
            .position(|p| p == &PathBuf::from("./").join("app.conf"))
            .unwrap();
        assert!(local < cwd);
    }

    #[test]
    fn test_first_existing_skips_missing() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present.conf");
        fs::write(&present, "log_level=debug\n").unwrap();

        let candidates = vec![dir.path().join("missing.conf"), present.clone()];
        assert_eq!(first_existing(&candidates), Some(present));
    }

    #[test]
    fn test_first_existing_ignores_directories() {
        let dir = tempdir().unwrap();
        let candidates = vec![dir.path().to_path_buf()];
        assert_eq!(first_existing(&candidates), None);
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");
        fs::write(&path, "column_gap=24\n").unwrap();

        assert_eq!(load_config_file(&path).unwrap(), "column_gap=24\n");
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# layout\n\nmax_content_width = 896\n  padding_x=16  \n";
        let entries = parse_key_values(content).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "max_content_width");
        assert_eq!(entries[0].value, "896");
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[1].key, "padding_x");
        assert_eq!(entries[1].value, "16");
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let entries = parse_key_values("log_path=/tmp/a=b.log").unwrap();
        assert_eq!(entries[0].value, "/tmp/a=b.log");
    }

    #[test]
    fn test_parse_rejects_line_without_separator() {
        let err = parse_key_values("log_level=info\nwindow_width\n").unwrap_err();
        match err {
            ConfigError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!(matches!(
            parse_key_values(" = 3"),
            Err(ConfigError::Parse { line: 1, .. })
        ));
    }
}
