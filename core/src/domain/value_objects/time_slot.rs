//! Appointment time slots.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A schedulable time slot within a service day.
///
/// Ordinary categories book either the morning or the afternoon slot.
/// A deep cleaning books [`TimeSlot::FullDay`], which occupies the whole
/// 09:00-17:00 service window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// 09:00 start
    Morning,
    /// 13:00 start
    Afternoon,
    /// The entire 09:00-17:00 service day
    FullDay,
}

impl TimeSlot {
    /// The moment staff arrive for this slot
    pub fn start_time(&self) -> NaiveTime {
        match self {
            TimeSlot::Morning | TimeSlot::FullDay => NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            TimeSlot::Afternoon => NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }
    }

    /// The 24-hour label offered on the booking form
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "09:00",
            TimeSlot::Afternoon => "13:00",
            TimeSlot::FullDay => "09:00-17:00",
        }
    }

    /// 12-hour rendering used in outbound messages
    pub fn display_12h(&self) -> String {
        match self {
            TimeSlot::FullDay => "9:00 AM - 5:00 PM".to_string(),
            _ => format_to_am_pm(self.start_time()),
        }
    }

    /// Stable identifier for persistence
    pub fn as_db_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::FullDay => "full_day",
        }
    }

    /// Parse the persistence identifier written by [`as_db_str`](Self::as_db_str)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(TimeSlot::Morning),
            "afternoon" => Some(TimeSlot::Afternoon),
            "full_day" => Some(TimeSlot::FullDay),
            _ => None,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a time of day on a 12-hour clock, e.g. `9:00 AM` or `1:30 PM`
pub fn format_to_am_pm(time: NaiveTime) -> String {
    use chrono::Timelike;

    let (hh, mm) = (time.hour(), time.minute());
    let period = if hh >= 12 { "PM" } else { "AM" };
    let hour12 = if hh % 12 == 0 { 12 } else { hh % 12 };
    format!("{}:{:02} {}", hour12, mm, period)
}
