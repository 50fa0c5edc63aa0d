//! Pure scheduling core for a personal calendar app.
//!
//! Everything here is a synchronous, side-effect-free function over plain
//! data: the caller owns the event list, the current instant, the selected
//! view and the search term, and renders or persists whatever comes back.
//!
//! - `date_grid` — month lengths, week rows and the Korean week/month labels
//! - `date_range` — event date/time strings to start/end instants
//! - `overlap` — double-booking detection for the event form
//! - `filter` — text search combined with the visible week/month window
//! - `notification` — which events have crossed their lead time "now"
//! - `validation` — start/end time ordering for the form
//!
//! Malformed event data never raises an error or panics anywhere in this
//! crate; invalid date/time strings flow through as `None` and simply fail
//! to match.

pub mod date_grid;
pub mod date_range;
pub mod error;
pub mod event;
pub mod filter;
pub mod notification;
pub mod overlap;
pub mod validation;

pub use date_grid::{
    days_in_month, events_for_day, fill_zero, format_date, format_month, format_week,
    is_date_in_range, week_dates, weeks_at_month,
};
pub use date_range::{DateRange, event_date_range, parse_date_time};
pub use error::ParseViewError;
pub use event::{CalendarView, Event, Repeat, RepeatType};
pub use filter::{events_in_view, events_matching_search, filtered_events};
pub use notification::{notification_message, upcoming_events};
pub use overlap::{find_overlapping_events, is_overlapping};
pub use validation::{TimeErrorMessage, time_error_message};
