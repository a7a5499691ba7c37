//! Slot availability error types
//!
//! These errors represent the ways a requested appointment slot can be
//! refused. The messages are user-facing: the booking form surfaces them
//! verbatim, so a full-day conflict and a same-time conflict carry
//! distinct wording.

use thiserror::Error;

/// Reasons a requested (date, time, service) slot is not schedulable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// The requested time is not one of the slots offered for the service
    #[error("The selected time is not offered for {service}. Please pick one of the listed slots.")]
    SlotNotOffered { service: String },

    /// A deep cleaning claims (or would claim) the whole service day
    #[error("That date is taken by a full-day deep cleaning. Please choose another date.")]
    FullDayConflict,

    /// Another booking already occupies the same time slot that day
    #[error("That time slot is already booked for the selected date. Please choose another time.")]
    SameTimeConflict,
}

impl AvailabilityError {
    /// Stable code for programmatic handling and logging
    pub fn code(&self) -> &'static str {
        match self {
            AvailabilityError::SlotNotOffered { .. } => "SLOT_NOT_OFFERED",
            AvailabilityError::FullDayConflict => "FULL_DAY_CONFLICT",
            AvailabilityError::SameTimeConflict => "SAME_TIME_CONFLICT",
        }
    }
}
