//! Booking notification message formatting.
//!
//! Produces the WhatsApp text handed to the notification sink. The layout
//! matches the message the homeFix.lk team already receives: a header
//! line followed by starred field lines, the phone in canonical form and
//! the time on a 12-hour clock.

use crate::domain::entities::booking::Booking;

/// Render the outbound message for an accepted booking
pub fn booking_message(booking: &Booking) -> String {
    format!(
        "New Booking Request from homeFix.lk\n\n\
         *Name:* {}\n\
         *Phone:* {}\n\
         *Service:* {}\n\
         *Location:* {}\n\
         *Preferred Date:* {}\n\
         *Preferred Time:* {}\n\
         *Note:* {}",
        booking.name,
        booking.phone,
        booking.service,
        booking.location,
        booking.date.format("%Y-%m-%d"),
        booking.time.display_12h(),
        booking.note.as_deref().unwrap_or("No special notes"),
    )
}
