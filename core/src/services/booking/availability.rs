//! Slot availability resolution.
//!
//! A pure decision over a snapshot of one day's bookings. Rules are
//! evaluated in order; the first matching rule decides:
//!
//! 1. an empty day is always available;
//! 2. a deep cleaning cannot join a day that has any booking;
//! 3. a day holding a deep cleaning admits nothing else;
//! 4. ordinary categories contend only on exact slot equality.
//!
//! Concurrent writers are not this function's concern: the repository
//! re-runs the same rules atomically at insert time.

use chrono::NaiveDate;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::{ServiceCategory, TimeSlot};
use crate::errors::AvailabilityError;

/// Decide whether `(date, slot, service)` is free given the day's bookings.
///
/// `same_day` may contain cancelled or off-date rows; they are ignored.
pub fn check_slot(
    date: NaiveDate,
    slot: TimeSlot,
    service: ServiceCategory,
    same_day: &[Booking],
) -> Result<(), AvailabilityError> {
    let existing: Vec<&Booking> = same_day
        .iter()
        .filter(|b| b.date == date && b.is_active())
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    // Full-day exclusivity in both directions
    if service.is_full_day() {
        return Err(AvailabilityError::FullDayConflict);
    }
    if existing.iter().any(|b| b.service.is_full_day()) {
        return Err(AvailabilityError::FullDayConflict);
    }

    if existing.iter().any(|b| b.time == slot) {
        return Err(AvailabilityError::SameTimeConflict);
    }

    Ok(())
}
