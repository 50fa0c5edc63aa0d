//! Upcoming-notification selection: which events have crossed their lead
//! time right now, and the message to show for them. Delivery and the
//! "already notified" bookkeeping belong to the caller; the notified id
//! set is passed back in on every call.

use chrono::{Duration, NaiveDateTime};
use tracing::trace;

use crate::date_range::parse_date_time;
use crate::event::Event;

/// Events whose notification threshold has arrived but which have not yet
/// started: `now` lies in `[start - notification_time minutes, start)`.
/// Events listed in `notified_ids` are excluded, as are events whose start
/// instant is invalid.
pub fn upcoming_events(
    events: &[Event],
    now: NaiveDateTime,
    notified_ids: &[String],
) -> Vec<Event> {
    let due: Vec<Event> = events
        .iter()
        .filter(|event| {
            if notified_ids.contains(&event.id) {
                return false;
            }
            let Some(start) = parse_date_time(&event.date, &event.start_time) else {
                return false;
            };
            let threshold = start - Duration::minutes(i64::from(event.notification_time));
            threshold <= now && now < start
        })
        .cloned()
        .collect();

    trace!(%now, due = due.len(), "notification scan");
    due
}

/// The message shown when an event's notification fires,
/// e.g. `"10분 후 기존 회의 일정이 시작됩니다."`.
pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}
