//! Port for awaited yes/no confirmation prompts.
//!
//! Used only before destructive actions (question deletion). The modal
//! itself is a presentation concern; the interactive adapter lives next
//! to the binary.

use async_trait::async_trait;

/// Port for asking the user a yes/no question and awaiting the answer.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Always answers yes. For tests and `--yes` runs.
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationPort for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Always answers no.
pub struct AutoDecline;

#[async_trait]
impl ConfirmationPort for AutoDecline {
    async fn confirm(&self, _message: &str) -> bool {
        false
    }
}
