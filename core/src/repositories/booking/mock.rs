//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;
use crate::services::booking::availability::check_slot;

use super::trait_::BookingRepository;

/// In-memory booking repository for testing.
///
/// Enforces the conditional-insert contract: the exclusivity rules are
/// re-evaluated under the write lock, so two racing inserts for the same
/// slot resolve to one winner and one availability error.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
    fail_queries: AtomicBool,
    fail_inserts: AtomicBool,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
            fail_queries: AtomicBool::new(false),
            fail_inserts: AtomicBool::new(false),
        }
    }

    /// Make subsequent `find_by_date` calls fail with a database error
    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `insert` calls fail with a database error
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Number of stored bookings
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    /// Seed an existing booking, bypassing the exclusivity rules
    pub async fn seed(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, DomainError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated query failure".to_string(),
            });
        }

        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.date == date && b.is_active())
            .cloned()
            .collect())
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated insert failure".to_string(),
            });
        }

        let mut bookings = self.bookings.write().await;

        // Re-check exclusivity under the write lock
        let same_day: Vec<Booking> = bookings
            .values()
            .filter(|b| b.date == booking.date && b.is_active())
            .cloned()
            .collect();
        check_slot(booking.date, booking.time, booking.service, &same_day)?;

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }
}
