//! Per-category slot catalog.
//!
//! The catalog is the single source for which time slots a service
//! category offers. The booking form consults it to restrict selectable
//! times; the availability resolver consults it to confirm a requested
//! time is legal for the chosen category.

use chrono::NaiveTime;

use crate::domain::value_objects::{ServiceCategory, TimeSlot};
use crate::errors::AvailabilityError;

/// The time slots offered for a service category.
///
/// Deep cleaning occupies the whole service day; every other category
/// offers a morning and an afternoon slot.
pub fn slots_for(service: ServiceCategory) -> &'static [TimeSlot] {
    if service.is_full_day() {
        &[TimeSlot::FullDay]
    } else {
        &[TimeSlot::Morning, TimeSlot::Afternoon]
    }
}

/// Map a requested start time onto the slot it books for a category.
///
/// A deep cleaning requested at 09:00 books the full day. Times outside
/// the category's catalog are rejected.
pub fn slot_for_time(
    service: ServiceCategory,
    time: NaiveTime,
) -> Result<TimeSlot, AvailabilityError> {
    slots_for(service)
        .iter()
        .find(|slot| slot.start_time() == time)
        .copied()
        .ok_or_else(|| AvailabilityError::SlotNotOffered {
            service: service.label().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_deep_cleaning_offers_full_day_only() {
        assert_eq!(slots_for(ServiceCategory::DeepCleaning), &[TimeSlot::FullDay]);
    }

    #[test]
    fn test_ordinary_categories_offer_two_slots() {
        for category in ServiceCategory::ALL {
            if category.is_full_day() {
                continue;
            }
            assert_eq!(
                slots_for(category),
                &[TimeSlot::Morning, TimeSlot::Afternoon]
            );
        }
    }

    #[test]
    fn test_slot_for_time_ordinary() {
        assert_eq!(
            slot_for_time(ServiceCategory::GeneralMaid, t(9)),
            Ok(TimeSlot::Morning)
        );
        assert_eq!(
            slot_for_time(ServiceCategory::SofaCarpet, t(13)),
            Ok(TimeSlot::Afternoon)
        );
    }

    #[test]
    fn test_slot_for_time_deep_cleaning() {
        assert_eq!(
            slot_for_time(ServiceCategory::DeepCleaning, t(9)),
            Ok(TimeSlot::FullDay)
        );
        // 13:00 is not a deep-cleaning start
        assert!(slot_for_time(ServiceCategory::DeepCleaning, t(13)).is_err());
    }

    #[test]
    fn test_off_catalog_time_rejected() {
        let err = slot_for_time(ServiceCategory::GeneralMaid, t(11)).unwrap_err();
        assert_eq!(err.code(), "SLOT_NOT_OFFERED");
    }
}
