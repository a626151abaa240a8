//! Captures `log` records so tests can check which events were emitted.

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

#[derive(Debug)]
struct Capture {
    lines: Mutex<Vec<String>>,
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger once per test binary.
pub(crate) fn install() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Whether any record emitted so far contains `needle`.
pub(crate) fn seen(needle: &str) -> bool {
    CAPTURE
        .lines
        .lock()
        .is_ok_and(|lines| lines.iter().any(|line| line.contains(needle)))
}
