//! Port for fire-and-forget user notifications.
//!
//! Toast presentation is an external collaborator: the engine hands over
//! a title, a message, and a severity and never waits for the result.
//! The `notify` method is intentionally synchronous and non-fallible so
//! a broken notifier cannot disturb the main flow.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Port for presenting a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// No-op implementation for tests and headless use.
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn notify(&self, _title: &str, _message: &str, _severity: Severity) {}
}
