//! Domain entities representing core business objects.

pub mod booking;
pub mod booking_request;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use booking_request::BookingForm;
