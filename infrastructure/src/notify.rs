//! Tracing-backed notifier adapter.

use quillform_application::{Notifier, Severity};
use tracing::{error, info, warn};

/// Routes notifications into the tracing log, mapping severity to level.
///
/// Headless stand-in for toast presentation; the CLI prints its own
/// user-facing output on top of this.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Error => error!("{title}: {message}"),
            Severity::Warning => warn!("{title}: {message}"),
            Severity::Success | Severity::Info => info!("{title}: {message}"),
        }
    }
}
