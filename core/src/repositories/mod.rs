//! Repository interfaces for the booking domain.

pub mod booking;

pub use booking::{BookingRepository, MockBookingRepository};
