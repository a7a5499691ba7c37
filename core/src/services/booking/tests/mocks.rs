//! Shared mocks for booking service tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;
use crate::repositories::{BookingRepository, MockBookingRepository};
use crate::services::booking::traits::NotificationSink;

/// Recording notification sink with optional failure injection
pub struct MockNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: AtomicBool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Messages dispatched so far, as (message, recipient) pairs
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for MockNotifier {
    async fn dispatch(&self, message: &str, recipient: &str) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated dispatch failure".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), recipient.to_string()));
        Ok(())
    }
}

/// Repository whose availability snapshot is always empty.
///
/// Models the read-then-write race: the submission service sees a free
/// day, but the underlying store already holds a conflicting booking, so
/// the conditional insert is what rejects the request.
pub struct StaleSnapshotRepository {
    pub inner: Arc<MockBookingRepository>,
}

#[async_trait]
impl BookingRepository for StaleSnapshotRepository {
    async fn find_by_date(&self, _date: NaiveDate) -> Result<Vec<Booking>, DomainError> {
        Ok(Vec::new())
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        self.inner.insert(booking).await
    }
}
