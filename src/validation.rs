//! Time-range validation for the create/edit form.

use crate::date_range::parse_date_time;

pub const START_TIME_ERROR: &str = "시작 시간은 종료 시간보다 빨라야 합니다.";
pub const END_TIME_ERROR: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";

/// Per-field error strings for the form's two time inputs. Both fields are
/// populated together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeErrorMessage {
    pub start_time_error: Option<&'static str>,
    pub end_time_error: Option<&'static str>,
}

/// Validate that `start` comes strictly before `end`.
///
/// Equal times are an error (a zero-length event is rejected). Empty or
/// malformed inputs report no error: the form only flags ordering once
/// both fields hold a parseable time.
pub fn time_error_message(start: &str, end: &str) -> TimeErrorMessage {
    // Date part is irrelevant here; any fixed day works for comparing times
    let start = parse_date_time("2024-01-01", start);
    let end = parse_date_time("2024-01-01", end);

    match (start, end) {
        (Some(start), Some(end)) if start >= end => TimeErrorMessage {
            start_time_error: Some(START_TIME_ERROR),
            end_time_error: Some(END_TIME_ERROR),
        },
        _ => TimeErrorMessage::default(),
    }
}
