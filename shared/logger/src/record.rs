use crate::level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One formatted log line: `[timestamp] LEVEL [component: name]: message\n`.
pub(crate) fn format_line(level: LogLevel, component: Option<&str>, message: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    match component {
        Some(component) => format!(
            "[{}] {} [component: {}]: {}\n",
            timestamp,
            level.as_str(),
            component,
            message
        ),
        None => format!("[{}] {}: {}\n", timestamp, level.as_str(), message),
    }
}
