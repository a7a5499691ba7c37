//! Booking entity representing an accepted appointment request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{NormalizedPhone, ServiceCategory, TimeSlot};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Accepted by the engine, awaiting staff confirmation
    Pending,
    /// Confirmed by staff
    Confirmed,
    /// Cancelled; no longer occupies its slot
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking still occupies its slot
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    /// Stable identifier for persistence
    pub fn as_db_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse the persistence identifier written by [`as_db_str`](Self::as_db_str)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// An accepted booking, one row per accepted request.
///
/// Created only by the submission service after validation and the
/// availability check both pass. The engine itself never mutates or
/// deletes a booking; confirmation and cancellation happen elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned when the booking is built for insertion
    pub id: Uuid,

    /// Customer name, trimmed
    pub name: String,

    /// Customer phone in canonical `+94XXXXXXXXX` form
    pub phone: NormalizedPhone,

    /// Booked service category
    pub service: ServiceCategory,

    /// Customer location, trimmed
    pub location: String,

    /// Appointment date
    pub date: NaiveDate,

    /// Appointment slot within the day
    pub time: TimeSlot,

    /// Optional customer note
    pub note: Option<String>,

    /// Lifecycle status; the engine only ever writes `Pending`
    pub status: BookingStatus,

    /// Timestamp when the booking was accepted
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new pending booking
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        phone: NormalizedPhone,
        service: ServiceCategory,
        location: String,
        date: NaiveDate,
        time: TimeSlot,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            service,
            location,
            date,
            time,
            note,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Whether the booking still occupies its slot
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
