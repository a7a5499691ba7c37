//! Business services containing domain logic and use cases.

pub mod booking;
pub mod notification;

// Re-export commonly used types
pub use booking::{
    availability::check_slot,
    catalog::{slot_for_time, slots_for},
    validator::{validate_form, ValidatedRequest},
    BookingService, BookingServiceConfig, NotificationSink, SubmissionOutcome,
    SubmissionRejection,
};
pub use notification::booking_message;
