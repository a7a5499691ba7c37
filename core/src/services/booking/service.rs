//! Booking submission service.
//!
//! Sequences one submission through its stages in strict order:
//! validate -> fresh same-day read -> availability -> persist -> notify.
//! Nothing is persisted before validation and availability both pass, and
//! no notification is attempted before persistence succeeds.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use hf_shared::utils::phone::mask_phone;

use crate::domain::entities::booking::Booking;
use crate::domain::entities::booking_request::BookingForm;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::BookingRepository;
use crate::services::notification::booking_message;

use super::availability::check_slot;
use super::catalog::slot_for_time;
use super::config::BookingServiceConfig;
use super::traits::NotificationSink;
use super::types::{SubmissionOutcome, SubmissionRejection};
use super::validator::validate_form;

/// Service handling booking form submissions
pub struct BookingService<R: BookingRepository, N: NotificationSink> {
    /// Shared booking store, the source of truth for slot occupancy
    repository: Arc<R>,
    /// Outbound notification channel
    notifier: Arc<N>,
    /// Service configuration
    config: BookingServiceConfig,
}

impl<R: BookingRepository, N: NotificationSink> BookingService<R, N> {
    /// Create a new booking service
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: BookingServiceConfig) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    /// Submit one booking request.
    ///
    /// # Returns
    /// * `Ok(SubmissionOutcome::Accepted { .. })` - persisted; `notified`
    ///   is false when the notification hand-off failed
    /// * `Ok(SubmissionOutcome::Rejected(_))` - field or slot rejection,
    ///   nothing persisted
    /// * `Err(DomainError)` - the store failed or timed out; the request
    ///   was not persisted and the caller may retry
    pub async fn submit(&self, form: &BookingForm) -> DomainResult<SubmissionOutcome> {
        let request = match validate_form(form, Utc::now(), self.config.min_lead_minutes) {
            Ok(request) => request,
            Err(field_errors) => {
                tracing::debug!(
                    error_count = field_errors.len(),
                    event = "booking_validation_failed",
                    "Booking form failed field validation"
                );
                return Ok(SubmissionOutcome::Rejected(SubmissionRejection::Fields(
                    field_errors,
                )));
            }
        };

        let slot = match slot_for_time(request.service, request.time) {
            Ok(slot) => slot,
            Err(conflict) => {
                return Ok(SubmissionOutcome::Rejected(SubmissionRejection::Slot(
                    conflict,
                )));
            }
        };

        // Fresh snapshot of the day's bookings
        let same_day = self
            .with_store_timeout("find_by_date", self.repository.find_by_date(request.date))
            .await?;

        if let Err(conflict) = check_slot(request.date, slot, request.service, &same_day) {
            tracing::info!(
                date = %request.date,
                slot = %slot,
                conflict = conflict.code(),
                event = "booking_slot_rejected",
                "Requested slot is not available"
            );
            return Ok(SubmissionOutcome::Rejected(SubmissionRejection::Slot(
                conflict,
            )));
        }

        let booking = Booking::new(
            request.name,
            request.phone,
            request.service,
            request.location,
            request.date,
            slot,
            request.note,
        );

        let booking = match self
            .with_store_timeout("insert", self.repository.insert(booking))
            .await
        {
            Ok(booking) => booking,
            // A concurrent submission won the slot between our snapshot
            // read and this write; surface the same conflict wording.
            Err(DomainError::Availability(conflict)) => {
                tracing::info!(
                    conflict = conflict.code(),
                    event = "booking_slot_lost_race",
                    "Slot was claimed by a concurrent submission"
                );
                return Ok(SubmissionOutcome::Rejected(SubmissionRejection::Slot(
                    conflict,
                )));
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event = "booking_persist_failed",
                    "Failed to persist booking"
                );
                return Err(e);
            }
        };

        tracing::info!(
            booking_id = %booking.id,
            date = %booking.date,
            slot = %booking.time,
            service = %booking.service,
            phone = %booking.phone.masked(),
            event = "booking_accepted",
            "Booking persisted"
        );

        // Best effort: a failed hand-off never rolls the booking back
        let message = booking_message(&booking);
        let notified = match self
            .notifier
            .dispatch(&message, &self.config.notify_recipient)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    booking_id = %booking.id,
                    recipient = %mask_phone(&self.config.notify_recipient),
                    error = %e,
                    event = "booking_notify_failed",
                    "Failed to dispatch booking notification"
                );
                false
            }
        };

        Ok(SubmissionOutcome::Accepted { booking, notified })
    }

    /// Run a store call under the configured timeout so a hung store
    /// surfaces as a retryable failure instead of blocking the submission.
    async fn with_store_timeout<T>(
        &self,
        operation: &str,
        fut: impl std::future::Future<Output = DomainResult<T>>,
    ) -> DomainResult<T> {
        let timeout = Duration::from_secs(self.config.store_timeout_secs);
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    operation = operation,
                    timeout_secs = self.config.store_timeout_secs,
                    event = "booking_store_timeout",
                    "Booking store call timed out"
                );
                Err(DomainError::Timeout {
                    operation: operation.to_string(),
                })
            }
        }
    }
}
