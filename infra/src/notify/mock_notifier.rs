//! Mock Notification Sink
//!
//! A mock implementation of the notification sink for development and
//! testing. Messages are logged to the console instead of being sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use hf_core::services::booking::NotificationSink;
use hf_shared::utils::phone::mask_phone;

/// Mock notification sink for development and testing
///
/// This implementation:
/// - Logs messages to console
/// - Tracks message count for testing
/// - Can simulate delivery failures
#[derive(Clone)]
pub struct MockNotifier {
    /// Counter for tracking number of messages dispatched
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock notifier with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages dispatched
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for MockNotifier {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        let masked = mask_phone(recipient);

        if self.simulate_failure {
            warn!(
                "Mock notifier simulating failure for recipient: {}",
                masked
            );
            return Err("Simulated notification failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK NOTIFIER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", masked);
            println!("{}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "notify",
            provider = "mock",
            recipient = %masked,
            message_length = message.len(),
            "Booking notification dispatched (mock)"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dispatch_counts_messages() {
        let notifier = MockNotifier::with_options(false, false);

        for i in 1..=3 {
            let result = notifier
                .dispatch(&format!("Message {}", i), "94769363695")
                .await;
            assert!(result.is_ok());
            assert_eq!(notifier.get_message_count(), i);
        }

        notifier.reset_counter();
        assert_eq!(notifier.get_message_count(), 0);
    }

    #[tokio::test]
    async fn simulated_failure_returns_err() {
        let notifier = MockNotifier::with_options(false, true);
        let result = notifier.dispatch("Message", "94769363695").await;

        assert!(result.is_err());
        assert_eq!(notifier.get_message_count(), 0);
    }
}
