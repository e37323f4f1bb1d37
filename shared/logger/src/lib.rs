//! Non-blocking logging for the room creation frontend.
//!
//! Records are formatted on the caller's thread and handed to a sink. The
//! file sink appends from a dedicated writer thread; the capture sink keeps
//! lines in memory for tests.

pub mod error;
mod level;
mod logger;
mod record;
mod sink;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use sink::CapturedLogs;
