//! Application-neutral event types.
//!
//! These mirror the JSON shape the calendar app stores and edits: field
//! names serialize in camelCase (`startTime`, `notificationTime`, ...).
//! The crate never mutates events; every operation takes them by reference
//! and hands filtered copies back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseViewError;

/// A scheduled calendar event.
///
/// `date` is a `YYYY-MM-DD` string and `start_time`/`end_time` are `HH:MM`
/// 24-hour strings, exactly as the owning form produces them. Malformed
/// strings are legal inputs everywhere in this crate; they surface as an
/// invalid instant (`None`) downstream rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: Repeat,
    /// Minutes of lead time before `start_time` at which the event
    /// becomes "upcoming".
    pub notification_time: u32,
}

/// Recurrence descriptor. Only `RepeatType::None` carries behavior today;
/// the other variants exist so stored events round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Calendar granularity currently displayed: the visible window used by
/// [`crate::filter::events_in_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    Month,
}

impl FromStr for CalendarView {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            _ => Err(ParseViewError(s.to_string())),
        }
    }
}
