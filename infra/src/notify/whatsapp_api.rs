//! WhatsApp Cloud API Notifier
//!
//! Sends the booking message directly to the business number through the
//! Meta Graph API. Used when the engine runs server-side and should not
//! depend on a human clicking a deep link.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

use hf_core::services::booking::NotificationSink;
use hf_shared::utils::phone::mask_phone;

use crate::InfrastructureError;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// WhatsApp Cloud API configuration
#[derive(Debug, Clone)]
pub struct WhatsAppApiConfig {
    /// Access token for the Meta app
    pub access_token: String,
    /// Phone number ID of the sending WhatsApp Business number
    pub phone_number_id: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl WhatsAppApiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let access_token = std::env::var("WHATSAPP_ACCESS_TOKEN").map_err(|_| {
            InfrastructureError::Config("WHATSAPP_ACCESS_TOKEN not set".to_string())
        })?;
        let phone_number_id = std::env::var("WHATSAPP_PHONE_NUMBER_ID").map_err(|_| {
            InfrastructureError::Config("WHATSAPP_PHONE_NUMBER_ID not set".to_string())
        })?;

        Ok(Self {
            access_token,
            phone_number_id,
            request_timeout_secs: std::env::var("WHATSAPP_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// WhatsApp Cloud API notification sink
pub struct WhatsAppApiNotifier {
    client: reqwest::Client,
    config: WhatsAppApiConfig,
}

impl WhatsAppApiNotifier {
    /// Create a new Cloud API notifier
    pub fn new(config: WhatsAppApiConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            phone_number_id = %config.phone_number_id,
            "WhatsApp Cloud API notifier initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = WhatsAppApiConfig::from_env()?;
        Self::new(config)
    }

    fn messages_url(&self) -> String {
        format!("{}/{}/messages", GRAPH_API_BASE, self.config.phone_number_id)
    }
}

#[async_trait]
impl NotificationSink for WhatsAppApiNotifier {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        let body = json!({
            "messaging_product": "whatsapp",
            "to": recipient,
            "type": "text",
            "text": { "body": message }
        });

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("WhatsApp API request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            info!(
                target: "notify",
                provider = "whatsapp-api",
                recipient = %mask_phone(recipient),
                message_length = message.len(),
                "Booking notification sent"
            );
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            error!(
                target: "notify",
                provider = "whatsapp-api",
                recipient = %mask_phone(recipient),
                status = %status,
                "WhatsApp API rejected the message: {}",
                detail
            );
            Err(format!("WhatsApp API returned status {}", status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_url_includes_phone_number_id() {
        let notifier = WhatsAppApiNotifier::new(WhatsAppApiConfig {
            access_token: "token".to_string(),
            phone_number_id: "1234567890".to_string(),
            request_timeout_secs: 5,
        })
        .expect("client builds");

        assert_eq!(
            notifier.messages_url(),
            "https://graph.facebook.com/v18.0/1234567890/messages"
        );
    }

    #[test]
    fn config_from_env_requires_token() {
        std::env::remove_var("WHATSAPP_ACCESS_TOKEN");
        let result = WhatsAppApiConfig::from_env();
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }
}
