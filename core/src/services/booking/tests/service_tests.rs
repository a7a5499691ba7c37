//! Unit tests for the booking submission service

use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::entities::booking::Booking;
use crate::domain::entities::booking_request::BookingForm;
use crate::domain::value_objects::{NormalizedPhone, ServiceCategory, TimeSlot};
use crate::errors::{AvailabilityError, DomainError};
use crate::repositories::MockBookingRepository;
use crate::services::booking::{
    BookingService, BookingServiceConfig, SubmissionOutcome, SubmissionRejection,
};

use super::mocks::{MockNotifier, StaleSnapshotRepository};

fn future_date(days: i64) -> NaiveDate {
    (Utc::now() + Duration::days(days)).date_naive()
}

fn form_for(date: NaiveDate, time: &str, service: &str) -> BookingForm {
    BookingForm {
        name: "Jane Silva".to_string(),
        phone: "0771234567".to_string(),
        service: service.to_string(),
        location: "Nugegoda".to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        time: time.to_string(),
        message: String::new(),
    }
}

fn existing_booking(date: NaiveDate, service: ServiceCategory, time: TimeSlot) -> Booking {
    Booking::new(
        "Existing Customer".to_string(),
        NormalizedPhone::parse("0712345678").unwrap(),
        service,
        "Kotte".to_string(),
        date,
        time,
        None,
    )
}

fn service_under_test(
) -> (Arc<MockBookingRepository>, Arc<MockNotifier>, BookingService<MockBookingRepository, MockNotifier>)
{
    let repository = Arc::new(MockBookingRepository::new());
    let notifier = Arc::new(MockNotifier::new());
    let service = BookingService::new(
        repository.clone(),
        notifier.clone(),
        BookingServiceConfig::default(),
    );
    (repository, notifier, service)
}

#[tokio::test]
async fn accepts_and_persists_a_valid_request() {
    let (repository, notifier, service) = service_under_test();
    let date = future_date(2);

    let outcome = service
        .submit(&form_for(date, "09:00", "General Maid Service"))
        .await
        .unwrap();

    let booking = outcome.booking().expect("accepted");
    assert_eq!(booking.phone.as_str(), "+94771234567");
    assert_eq!(booking.time, TimeSlot::Morning);
    assert_eq!(repository.len().await, 1);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].0.contains("*Phone:* +94771234567"));
    assert!(sent[0].0.contains("*Preferred Time:* 9:00 AM"));
    assert_eq!(sent[0].1, "94769363695");
}

#[tokio::test]
async fn rejects_fields_without_touching_the_store() {
    let (repository, notifier, service) = service_under_test();

    let mut form = form_for(future_date(2), "09:00", "General Maid Service");
    form.phone = "123".to_string();
    form.name = String::new();

    let outcome = service.submit(&form).await.unwrap();
    match outcome {
        SubmissionOutcome::Rejected(SubmissionRejection::Fields(errors)) => {
            assert!(errors.get("phone").is_some());
            assert!(errors.get("name").is_some());
        }
        other => panic!("expected field rejection, got {:?}", other),
    }
    assert!(repository.is_empty().await);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn rejects_when_day_holds_a_deep_cleaning() {
    let (repository, notifier, service) = service_under_test();
    let date = future_date(2);
    repository
        .seed(existing_booking(date, ServiceCategory::DeepCleaning, TimeSlot::FullDay))
        .await;

    let outcome = service
        .submit(&form_for(date, "09:00", "General Maid Service"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(SubmissionRejection::Slot(
            AvailabilityError::FullDayConflict
        ))
    );
    assert_eq!(repository.len().await, 1);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn rejects_deep_cleaning_on_an_occupied_day() {
    let (repository, _, service) = service_under_test();
    let date = future_date(2);
    repository
        .seed(existing_booking(date, ServiceCategory::GeneralMaid, TimeSlot::Morning))
        .await;

    let outcome = service
        .submit(&form_for(date, "09:00", "Deep Cleaning"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(SubmissionRejection::Slot(
            AvailabilityError::FullDayConflict
        ))
    );
}

#[tokio::test]
async fn same_time_conflicts_but_other_slot_is_free() {
    let (repository, _, service) = service_under_test();
    let date = future_date(2);
    repository
        .seed(existing_booking(date, ServiceCategory::GeneralMaid, TimeSlot::Morning))
        .await;

    let conflict = service
        .submit(&form_for(date, "09:00", "Sofa/Carpet Cleaning"))
        .await
        .unwrap();
    assert_eq!(
        conflict,
        SubmissionOutcome::Rejected(SubmissionRejection::Slot(
            AvailabilityError::SameTimeConflict
        ))
    );

    let accepted = service
        .submit(&form_for(date, "13:00", "Sofa/Carpet Cleaning"))
        .await
        .unwrap();
    assert!(accepted.is_accepted());
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn off_catalog_time_is_rejected() {
    let (repository, _, service) = service_under_test();

    let outcome = service
        .submit(&form_for(future_date(2), "11:00", "General Maid Service"))
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Rejected(SubmissionRejection::Slot(
            AvailabilityError::SlotNotOffered { service },
        )) => assert_eq!(service, "General Maid Service"),
        other => panic!("expected slot rejection, got {:?}", other),
    }
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn deep_cleaning_books_the_full_day_slot() {
    let (_, notifier, service) = service_under_test();

    let outcome = service
        .submit(&form_for(future_date(2), "09:00", "Deep Cleaning"))
        .await
        .unwrap();

    let booking = outcome.booking().expect("accepted");
    assert_eq!(booking.time, TimeSlot::FullDay);
    assert!(notifier.sent()[0].0.contains("*Preferred Time:* 9:00 AM - 5:00 PM"));
}

#[tokio::test]
async fn store_failure_surfaces_as_error_without_notification() {
    let (repository, notifier, service) = service_under_test();
    repository.set_fail_inserts(true);

    let result = service
        .submit(&form_for(future_date(2), "09:00", "General Maid Service"))
        .await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn query_failure_surfaces_as_error() {
    let (repository, _, service) = service_under_test();
    repository.set_fail_queries(true);

    let result = service
        .submit(&form_for(future_date(2), "09:00", "General Maid Service"))
        .await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
}

#[tokio::test]
async fn notification_failure_does_not_roll_back() {
    let (repository, notifier, service) = service_under_test();
    notifier.set_fail(true);

    let outcome = service
        .submit(&form_for(future_date(2), "09:00", "General Maid Service"))
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Accepted { notified, .. } => assert!(!notified),
        other => panic!("expected acceptance, got {:?}", other),
    }
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn losing_a_slot_race_surfaces_the_conflict() {
    let inner = Arc::new(MockBookingRepository::new());
    let date = future_date(2);
    inner
        .seed(existing_booking(date, ServiceCategory::GeneralMaid, TimeSlot::Morning))
        .await;

    // The snapshot read misses the competing booking; the conditional
    // insert must still reject.
    let repository = Arc::new(StaleSnapshotRepository { inner });
    let notifier = Arc::new(MockNotifier::new());
    let service = BookingService::new(
        repository,
        notifier.clone(),
        BookingServiceConfig::default(),
    );

    let outcome = service
        .submit(&form_for(date, "09:00", "Move-In/Out"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(SubmissionRejection::Slot(
            AvailabilityError::SameTimeConflict
        ))
    );
    assert!(notifier.sent().is_empty());
}
