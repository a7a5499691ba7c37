//! WhatsApp Deep-Link Notifier
//!
//! Builds `https://wa.me/{number}?text={message}` links for the booking
//! message. The link form is what the public site hands to the visitor's
//! browser, so the text component must be encoded exactly the way
//! JavaScript's `encodeURIComponent` does it, or the message renders
//! differently depending on which side built the link.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Mutex;
use tracing::{debug, info};

use hf_core::services::booking::NotificationSink;
use hf_shared::utils::phone::mask_phone;

/// Characters left unescaped by `encodeURIComponent`:
/// alphanumerics plus `- _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a WhatsApp deep link for `recipient` (digits only, country code
/// included, no `+`) carrying `message` as the prefilled text.
pub fn build_wa_link(recipient: &str, message: &str) -> String {
    let encoded = utf8_percent_encode(message, URI_COMPONENT);
    format!("https://wa.me/{}?text={}", recipient, encoded)
}

/// Notification sink that materializes the booking message as a `wa.me`
/// deep link. Nothing leaves the process; the link is logged and kept so
/// the caller (or a test) can retrieve it.
pub struct WaLinkNotifier {
    last_link: Mutex<Option<String>>,
}

impl WaLinkNotifier {
    pub fn new() -> Self {
        Self {
            last_link: Mutex::new(None),
        }
    }

    /// The most recently built link, if any
    pub fn last_link(&self) -> Option<String> {
        match self.last_link.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for WaLinkNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for WaLinkNotifier {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        let link = build_wa_link(recipient, message);

        debug!(link_length = link.len(), "Built WhatsApp deep link");
        info!(
            target: "notify",
            provider = "wa-link",
            recipient = %mask_phone(recipient),
            message_length = message.len(),
            "Booking notification link ready"
        );

        match self.last_link.lock() {
            Ok(mut guard) => *guard = Some(link),
            Err(poisoned) => *poisoned.into_inner() = Some(link),
        }

        Ok(())
    }
}
