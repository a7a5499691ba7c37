//! Configuration for the booking submission service

/// Minimum minutes between submission and the requested appointment
pub const DEFAULT_MIN_LEAD_MINUTES: i64 = 30;

/// Configuration for the booking submission service
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// Minimum lead time in minutes before the appointment instant
    pub min_lead_minutes: i64,
    /// Timeout for booking store calls, in seconds
    pub store_timeout_secs: u64,
    /// Recipient address for outbound booking notifications
    /// (the business WhatsApp number, digits only)
    pub notify_recipient: String,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self {
            min_lead_minutes: DEFAULT_MIN_LEAD_MINUTES,
            store_timeout_secs: 10,
            notify_recipient: "94769363695".to_string(),
        }
    }
}
