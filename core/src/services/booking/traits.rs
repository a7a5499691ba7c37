//! Traits for notification channel integration

use async_trait::async_trait;
use std::sync::Arc;

/// Trait for the outbound notification channel.
///
/// Dispatch is fire-and-forget from the engine's perspective: a failure
/// is reported to the caller for logging but never affects an already
/// persisted booking.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Hand a formatted message to the channel for the given recipient
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String>;
}

#[async_trait]
impl<T: NotificationSink + ?Sized> NotificationSink for Box<T> {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        (**self).dispatch(message, recipient).await
    }
}

#[async_trait]
impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        (**self).dispatch(message, recipient).await
    }
}
