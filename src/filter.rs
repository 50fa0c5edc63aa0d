//! Free-text search combined with the visible week/month window.
//!
//! These are the functions the app re-runs on every keystroke and view
//! change, so they stay linear scans over the event list with no state of
//! their own. Whatever reactivity layer sits above (hook, signal, store)
//! just calls [`filtered_events`] again.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::date_grid::{is_date_in_range, week_dates};
use crate::event::{CalendarView, Event};

/// Events whose title, description or location contains `term`,
/// case-insensitively. An empty term matches everything.
pub fn events_matching_search(events: &[Event], term: &str) -> Vec<Event> {
    if term.is_empty() {
        return events.to_vec();
    }

    let needle = term.to_lowercase();
    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Events visible under `view` anchored at `reference`: the same calendar
/// month for [`CalendarView::Month`], the Sunday-Saturday week containing
/// `reference` for [`CalendarView::Week`]. Events with unparseable dates
/// are never visible.
pub fn events_in_view(events: &[Event], reference: NaiveDate, view: CalendarView) -> Vec<Event> {
    let week = week_dates(reference);

    events
        .iter()
        .filter(|event| {
            let Ok(date) = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d") else {
                return false;
            };
            match view {
                CalendarView::Month => {
                    date.year() == reference.year() && date.month() == reference.month()
                }
                CalendarView::Week => is_date_in_range(date, week[0], week[6]),
            }
        })
        .cloned()
        .collect()
}

/// The list the calendar renders: search narrowed first, then the view
/// window. Both predicates must hold for an event to survive.
pub fn filtered_events(
    events: &[Event],
    term: &str,
    reference: NaiveDate,
    view: CalendarView,
) -> Vec<Event> {
    let matched = events_matching_search(events, term);
    let visible = events_in_view(&matched, reference, view);

    trace!(
        term,
        ?view,
        total = events.len(),
        kept = visible.len(),
        "filtered events"
    );
    visible
}
