//! Result types for booking submission

use hf_shared::utils::validation::FieldErrors;

use crate::domain::entities::booking::Booking;
use crate::errors::AvailabilityError;

/// Why a submission was turned back for correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRejection {
    /// One or more fields failed validation; map of field -> message
    Fields(FieldErrors),
    /// The requested slot is not schedulable
    Slot(AvailabilityError),
}

/// Outcome of one booking submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The booking was persisted. `notified` records whether the outbound
    /// message was handed off successfully; a failed hand-off never rolls
    /// the booking back.
    Accepted { booking: Booking, notified: bool },
    /// The request was rejected before anything was persisted
    Rejected(SubmissionRejection),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// The persisted booking, if the submission was accepted
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            SubmissionOutcome::Accepted { booking, .. } => Some(booking),
            SubmissionOutcome::Rejected(_) => None,
        }
    }
}
