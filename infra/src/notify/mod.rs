//! Notification Module
//!
//! This module provides notification sink implementations for forwarding
//! accepted booking requests to the business owner. It includes support
//! for WhatsApp delivery and a mock implementation for development.
//!
//! ## Features
//!
//! - **WhatsApp Deep Link**: Builds `wa.me` links carrying the booking
//!   message, for channels where a human clicks through
//! - **WhatsApp Cloud API**: Direct delivery through the Meta Graph API
//! - **Mock Implementation**: Console output for development
//! - **Security**: Phone number masking in logs

pub mod mock_notifier;
pub mod wa_link;
pub mod whatsapp_api;

// Re-export commonly used types
pub use mock_notifier::MockNotifier;
pub use wa_link::{build_wa_link, WaLinkNotifier};
pub use whatsapp_api::{WhatsAppApiConfig, WhatsAppApiNotifier};

use hf_core::services::booking::NotificationSink;

use crate::config::NotifyConfig;

/// Create a notification sink based on configuration
///
/// Returns the appropriate sink implementation based on the provider
/// specified in the configuration. Unknown providers and providers whose
/// credentials fail to load fall back to the mock sink.
pub fn create_notifier(config: &NotifyConfig) -> Box<dyn NotificationSink> {
    match config.provider.as_str() {
        "mock" => Box::new(MockNotifier::new()),
        "wa-link" => Box::new(WaLinkNotifier::new()),
        "whatsapp-api" => match WhatsAppApiConfig::from_env() {
            Ok(api_config) => match WhatsAppApiNotifier::new(api_config) {
                Ok(notifier) => Box::new(notifier),
                Err(e) => {
                    tracing::error!("Failed to initialize WhatsApp API notifier: {}", e);
                    tracing::warn!("Falling back to mock notifier");
                    Box::new(MockNotifier::new())
                }
            },
            Err(e) => {
                tracing::error!("Failed to load WhatsApp API configuration: {}", e);
                tracing::warn!("Falling back to mock notifier");
                Box::new(MockNotifier::new())
            }
        },
        _ => {
            tracing::warn!(
                "Unknown notify provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockNotifier::new())
        }
    }
}
