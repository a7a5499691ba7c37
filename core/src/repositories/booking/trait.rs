//! Booking repository trait defining the interface for booking persistence.
//!
//! The shared booking calendar is the single source of truth for slot
//! occupancy. Implementations must uphold the conditional-insert contract
//! documented on [`BookingRepository::insert`]; the availability check the
//! submission service runs beforehand reads only a snapshot and cannot see
//! concurrent writers.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

/// Repository trait for booking persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fetch all non-cancelled bookings for a calendar date.
    ///
    /// # Returns
    /// * `Ok(bookings)` - possibly empty list of active bookings that day
    /// * `Err(DomainError)` - the store could not be read
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, DomainError>;

    /// Persist one booking, conditionally.
    ///
    /// The insert must be atomic with a re-check of the exclusivity rules:
    /// if a concurrent submission claimed the slot (same time slot, or a
    /// deep cleaning anywhere on the date, in either direction) between the
    /// caller's availability check and this write, the losing writer gets
    /// `Err(DomainError::Availability(_))` carrying the same conflict the
    /// up-front check would have reported.
    ///
    /// # Returns
    /// * `Ok(booking)` - the persisted booking
    /// * `Err(DomainError::Availability(_))` - lost a slot race
    /// * `Err(DomainError)` - the store could not be written
    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError>;
}
