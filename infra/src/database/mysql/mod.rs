//! MySQL implementations of the repository traits

mod booking_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
