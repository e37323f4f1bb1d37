//! Destinations for formatted log lines.

use crate::error::{LoggingError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Where a [`crate::Logger`] delivers its lines.
#[derive(Clone)]
pub(crate) enum Sink {
    /// Handed to the writer thread. Shared by every logger clone.
    File(Arc<FileWriter>),
    /// Kept in memory.
    Capture(CapturedLogs),
}

impl Sink {
    pub(crate) fn deliver(&self, line: String) {
        match self {
            Sink::File(writer) => writer.send(line),
            Sink::Capture(captured) => captured.push(line),
        }
    }
}

/// Channel into the writer thread. Dropping the last handle closes the
/// channel and waits until every queued line is on disk.
pub(crate) struct FileWriter {
    sender: Option<Sender<String>>,
    handle: Option<JoinHandle<()>>,
}

impl FileWriter {
    fn send(&self, line: String) {
        if let Some(sender) = &self.sender {
            // Writer thread gone means the process is shutting down.
            let _ = sender.send(line);
        }
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            eprintln!("Log writer thread panicked");
        }
    }
}

/// Opens `path` for appending and starts the thread draining into it.
pub(crate) fn spawn_file_sink(path: &Path) -> Result<Sink> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (sender, receiver) = channel();

    let handle = thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || write_until_closed(file, receiver))
        .map_err(|e| LoggingError::Logging(format!("failed to spawn writer: {}", e)))?;

    Ok(Sink::File(Arc::new(FileWriter {
        sender: Some(sender),
        handle: Some(handle),
    })))
}

fn write_until_closed(mut file: File, receiver: Receiver<String>) {
    for line in receiver {
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            eprintln!("Error writing log: {}", e);
        }
    }
}

/// Shared in-memory buffer of captured log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturedLogs {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Snapshot of every line captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// True if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}
