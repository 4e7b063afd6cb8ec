use std::cell::RefCell;
use std::io::{self, Write};

/// Where progress lines go.
pub trait Diagnostics {
    fn emit(&self, line: &str);
}

/// Writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn emit(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Forwards each line to `log::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, line: &str) {
        log::info!("{line}");
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn emit(&self, _line: &str) {}
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    lines: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// True if any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}
