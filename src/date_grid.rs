//! Calendar date-grid math: month lengths, week rows, Korean week/month
//! labels, and the zero-padded `YYYY-MM-DD` formatting the rest of the
//! crate builds on.

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::Event;

/// Number of days in `month` of `year`, honoring Gregorian leap years.
///
/// Out-of-range months roll into adjacent years the way JS `Date`
/// arithmetic does: month 13 is January of `year + 1`, month 0 is December
/// of `year - 1`, and larger excursions carry further.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let zero_based = month - 1;
    let year = year + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The seven consecutive dates (Sunday through Saturday) of the week
/// containing `date`, crossing month and year boundaries as needed.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// The month containing `date` as ordered week rows.
///
/// Each row holds seven cells, column 0 = Sunday; cells outside the month
/// are `None`.
pub fn weeks_at_month(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let day_count = days_in_month(date.year(), date.month() as i32);
    let first_day = date.with_day(1).unwrap_or(date);
    let leading = first_day.weekday().num_days_from_sunday();

    let mut weeks = Vec::new();
    let mut row = [None; 7];
    let mut column = leading as usize;

    for day in 1..=day_count {
        row[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(row);
            row = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(row);
    }

    weeks
}

/// Korean week label, e.g. `"2024년 10월 2주"`.
///
/// The week belongs to whichever month (and year) its Thursday falls in,
/// so a week straddling a month edge is week 1 of the later month when its
/// Thursday has already crossed over.
pub fn format_week(date: NaiveDate) -> String {
    let thursday = week_dates(date)[4];
    let week_number = (thursday.day() + 6) / 7;
    format!(
        "{}년 {}월 {}주",
        thursday.year(),
        thursday.month(),
        week_number
    )
}

/// Korean month label, e.g. `"2024년 7월"`.
pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Inclusive-inclusive range membership. An inverted range (`start` after
/// `end`) is empty: every date tests false, no swapping.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Events whose `date` falls on the given day-of-month. Days outside 1-31
/// and events with unparseable dates yield nothing.
pub fn events_for_day<'a>(events: &'a [Event], day: u32) -> Vec<&'a Event> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| {
            NaiveDate::parse_from_str(&event.date, "%Y-%m-%d")
                .map(|date| date.day() == day)
                .unwrap_or(false)
        })
        .collect()
}

/// Left-pad the natural decimal rendering of `value` with `'0'` up to
/// `size` characters. Padding never truncates: a rendering already at or
/// beyond `size` comes back untouched. Integral values render without a
/// fraction (`5.0` pads to `"05"`), non-integral ones keep their decimal
/// point (`3.14` at size 5 pads to `"03.14"`).
pub fn fill_zero(value: f64, size: usize) -> String {
    let text = if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    };

    if text.len() >= size {
        text
    } else {
        format!("{}{}", "0".repeat(size - text.len()), text)
    }
}

/// Format `date` as `YYYY-MM-DD`, optionally overriding the day-of-month.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    let day = day.unwrap_or_else(|| date.day());
    format!(
        "{}-{}-{}",
        date.year(),
        fill_zero(f64::from(date.month()), 2),
        fill_zero(f64::from(day), 2)
    )
}
