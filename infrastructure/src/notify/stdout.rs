//! Fallback notifier that prints the report.

use airwatch_application::ports::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use std::io::Write;

/// Used when Telegram credentials are missing.
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    fn channel(&self) -> &str {
        "stdout"
    }

    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| NotifyError::Delivery(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stdout_notifier_succeeds() {
        let notifier = StdoutNotifier;
        assert_eq!(notifier.channel(), "stdout");
        assert!(notifier.notify("report").await.is_ok());
    }
}
