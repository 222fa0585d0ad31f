//! Interactive terminal adapters.

use async_trait::async_trait;
use quillform_application::ConfirmationPort;

/// Yes/no prompt on stdin. Anything other than `y`/`yes` declines.
pub struct StdinConfirmation;

#[async_trait]
impl ConfirmationPort for StdinConfirmation {
    async fn confirm(&self, message: &str) -> bool {
        println!("{message} [y/N]");
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
