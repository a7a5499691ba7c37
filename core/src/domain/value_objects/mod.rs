//! Value objects for the booking domain.

pub mod phone;
pub mod service_category;
pub mod time_slot;

// Re-export commonly used types
pub use phone::{InvalidPhone, NormalizedPhone};
pub use service_category::ServiceCategory;
pub use time_slot::{format_to_am_pm, TimeSlot};
