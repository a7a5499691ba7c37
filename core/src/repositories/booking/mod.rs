//! Booking repository interface and in-memory implementation.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

#[cfg(test)]
mod tests;

pub use mock::MockBookingRepository;
pub use r#trait::BookingRepository;
