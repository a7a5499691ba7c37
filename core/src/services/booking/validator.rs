//! Field validation for booking form submissions.
//!
//! Every field is checked independently and the full error map is built
//! in one pass, so the form can surface all problems at once. The
//! function is pure: the clock is an explicit argument.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use hf_shared::utils::validation::FieldErrors;

use crate::domain::entities::booking_request::BookingForm;
use crate::domain::value_objects::{NormalizedPhone, ServiceCategory};

/// A booking request whose fields have all passed validation.
///
/// Immutable once built; the submission service consumes it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub name: String,
    pub phone: NormalizedPhone,
    pub service: ServiceCategory,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub note: Option<String>,
}

/// Validate a raw form submission against the field rules.
///
/// `now` is the moment of validation; `min_lead_minutes` is the minimum
/// interval required between `now` and the requested appointment instant.
///
/// Returns the validated request, or the full field -> message error map.
pub fn validate_form(
    form: &BookingForm,
    now: DateTime<Utc>,
    min_lead_minutes: i64,
) -> Result<ValidatedRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.add("name", "Full name is required.");
    } else if name.chars().count() < 2 {
        errors.add("name", "Please enter at least 2 characters.");
    }

    let phone = if form.phone.trim().is_empty() {
        errors.add("phone", "Phone number is required.");
        None
    } else {
        match NormalizedPhone::parse(&form.phone) {
            Ok(phone) => Some(phone),
            Err(e) => {
                errors.add("phone", e.to_string());
                None
            }
        }
    };

    let service = if form.service.trim().is_empty() {
        errors.add("service", "Please select a service.");
        None
    } else {
        match form.service.parse::<ServiceCategory>() {
            Ok(service) => Some(service),
            Err(()) => {
                errors.add("service", "Please select a valid service option.");
                None
            }
        }
    };

    let location = form.location.trim();
    if location.is_empty() {
        errors.add("location", "Location is required.");
    } else if location.chars().count() < 2 {
        errors.add("location", "Please enter a valid location.");
    }

    let today = now.date_naive();
    let date = if form.date.trim().is_empty() {
        errors.add("date", "Please select a preferred date.");
        None
    } else {
        match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
            Ok(date) => {
                if date < today {
                    errors.add("date", "Date cannot be in the past.");
                    None
                } else {
                    Some(date)
                }
            }
            Err(_) => {
                errors.add("date", "Please select a valid date.");
                None
            }
        }
    };

    let time = if form.time.trim().is_empty() {
        errors.add("time", "Please select a preferred time.");
        None
    } else {
        match NaiveTime::parse_from_str(form.time.trim(), "%H:%M") {
            Ok(time) => Some(time),
            Err(_) => {
                errors.add("time", "Please select a valid time.");
                None
            }
        }
    };

    // Lead-time rule: the appointment instant must be at least
    // `min_lead_minutes` ahead of now. Only checkable once both the
    // date and the time parsed.
    if let (Some(date), Some(time)) = (date, time) {
        let appointment = date.and_time(time);
        let earliest = now.naive_utc() + Duration::minutes(min_lead_minutes);
        if appointment < earliest {
            errors.add(
                "time",
                format!(
                    "Please choose a time at least {} minutes from now.",
                    min_lead_minutes
                ),
            );
        }
    }

    let message = form.message.trim();
    if !message.is_empty() && message.chars().count() < 5 {
        errors.add(
            "message",
            "If you add a message, please enter at least 5 characters.",
        );
    }

    match (phone, service, date, time) {
        (Some(phone), Some(service), Some(date), Some(time)) if errors.is_empty() => {
            Ok(ValidatedRequest {
                name: name.to_string(),
                phone,
                service,
                location: location.to_string(),
                date,
                time,
                note: if message.is_empty() {
                    None
                } else {
                    Some(message.to_string())
                },
            })
        }
        _ => Err(errors),
    }
}
