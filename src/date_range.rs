//! Conversion from an event's date/time strings to start and end instants.
//!
//! Instants are timezone-naive wall-clock values, matching how the calendar
//! app interprets what the user typed. Malformed or empty strings never
//! error out of this module; they become `None`, the crate-wide
//! invalid-instant sentinel, and every dependent computation (overlap,
//! notifications) treats `None` as "never matches".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::Event;

/// Start/end instant pair derived from an event. Either side is `None`
/// when its source strings failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` time into one instant.
/// Returns `None` for malformed or empty components.
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// The instant pair spanned by `event`. Invalid date/time strings
/// propagate as invalid start/end rather than aborting.
pub fn event_date_range(event: &Event) -> DateRange {
    DateRange {
        start: parse_date_time(&event.date, &event.start_time),
        end: parse_date_time(&event.date, &event.end_time),
    }
}
