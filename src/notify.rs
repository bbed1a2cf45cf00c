// src/notify.rs

/// The user-facing notification surface (toast/banner). The web layer owns
/// the real implementation; the core only ever emits through this seam, so
/// tests swap in `RecordingNotifier` and assert on what surfaced.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Default sink: routes notifications to the log facade. Used when no UI is
/// attached (batch jobs, examples).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Test double that records everything it is told to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub errors: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
