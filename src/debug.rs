// ABOUTME: Optional trace sink for the `-d` CLI flag

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

enum Sink {
    None,
    Stdout(Mutex<Stdout>),
    File(Mutex<File>),
}

/// A trace destination for eval-step and fork-decision diagnostics,
/// installed once at startup and shared (via `Arc`) into every worker
/// thread, rather than reached for through a single global handle.
pub struct DebugSink(Sink);

impl DebugSink {
    pub fn disabled() -> Self {
        DebugSink(Sink::None)
    }

    pub fn stdout() -> Self {
        DebugSink(Sink::Stdout(Mutex::new(io::stdout())))
    }

    pub fn file(path: &std::path::Path) -> io::Result<Self> {
        Ok(DebugSink(Sink::File(Mutex::new(File::create(path)?))))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.0, Sink::None)
    }

    /// Writes one trace line, prefixed with the current thread's id so
    /// interleaved worker output stays attributable, mirroring the
    /// `%ld: <message>` lines the original `DPRINT` macro emitted per thread.
    pub fn trace(&self, message: impl std::fmt::Display) {
        let line = format!("{:?}: {}\n", std::thread::current().id(), message);
        match &self.0 {
            Sink::None => {}
            Sink::Stdout(out) => {
                let _ = out.lock().unwrap().write_all(line.as_bytes());
            }
            Sink::File(file) => {
                let _ = file.lock().unwrap().write_all(line.as_bytes());
            }
        }
    }
}
