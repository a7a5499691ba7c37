//! Outbound notification formatting

mod message;

pub use message::booking_message;
