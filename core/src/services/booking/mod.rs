//! Booking submission service module
//!
//! This module implements the booking engine:
//! - Field validation of raw form submissions
//! - The per-category slot catalog
//! - Slot availability resolution against the shared calendar
//! - The submission service sequencing validation, availability,
//!   persistence and notification dispatch

pub mod availability;
pub mod catalog;
mod config;
mod service;
pub mod traits;
mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use config::{BookingServiceConfig, DEFAULT_MIN_LEAD_MINUTES};
pub use service::BookingService;
pub use traits::NotificationSink;
pub use types::{SubmissionOutcome, SubmissionRejection};
