//! Overlap detection between scheduled events, used by the create/edit
//! form to warn before double-booking a slot.

use tracing::trace;

use crate::date_range::event_date_range;
use crate::event::Event;

/// Whether two events occupy intersecting time ranges.
///
/// Sharing a boundary instant counts: an event ending at 12:00 overlaps
/// one starting at 12:00. Any invalid start/end instant makes the pair
/// non-overlapping. Symmetric in its arguments.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    let range_a = event_date_range(a);
    let range_b = event_date_range(b);

    match (range_a.start, range_a.end, range_b.start, range_b.end) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            a_start <= b_end && b_start <= a_end
        }
        _ => false,
    }
}

/// All events in `existing` that overlap `candidate`, in input order.
/// An entry carrying the candidate's own id is skipped so editing an
/// event never reports a conflict with itself.
pub fn find_overlapping_events(candidate: &Event, existing: &[Event]) -> Vec<Event> {
    let overlapping: Vec<Event> = existing
        .iter()
        .filter(|event| event.id != candidate.id && is_overlapping(candidate, event))
        .cloned()
        .collect();

    trace!(
        candidate = %candidate.id,
        found = overlapping.len(),
        "overlap scan"
    );
    overlapping
}
