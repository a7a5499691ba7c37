//! Raw booking request as submitted by the booking form.

use serde::{Deserialize, Serialize};

/// One submission of the booking form, exactly as received.
///
/// Every field is an untrusted string until the field validator has
/// accepted it. `date` is expected as `YYYY-MM-DD` and `time` as `HH:MM`,
/// matching the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub location: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub message: String,
}
