//! End-to-end filtering flow: events arrive as the app's JSON, the caller
//! re-runs `filtered_events` on every search/view change, and feeds the
//! same list into the notification scan.

use chrono::{NaiveDate, NaiveDateTime};
use harucal::{CalendarView, Event, filtered_events, notification_message, upcoming_events};

fn fixture_events() -> Vec<Event> {
    serde_json::from_str(
        r#"[
        {
            "id": "2b7545a6-ebee-426c-b906-2329bc8d62bd",
            "title": "팀 회의",
            "date": "2024-09-01",
            "startTime": "10:00",
            "endTime": "11:00",
            "description": "주간 팀 미팅",
            "location": "회의실 A",
            "category": "업무",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        },
        {
            "id": "09702fb3-a478-40b3-905e-9ab3c8849dcd",
            "title": "점심 약속",
            "date": "2024-09-08",
            "startTime": "12:30",
            "endTime": "13:30",
            "description": "동료와 점심 식사",
            "location": "회사 근처 식당",
            "category": "개인",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        },
        {
            "id": "da3ca408-836a-4d98-b67a-ca389d07552b",
            "title": "프로젝트 마감",
            "date": "2024-10-01",
            "startTime": "09:00",
            "endTime": "18:00",
            "description": "분기별 프로젝트 마감",
            "location": "사무실",
            "category": "업무",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        },
        {
            "id": "dac62941-69e5-4ec0-98cc-24c2a79a7f81",
            "title": "생일 파티",
            "date": "2024-10-08",
            "startTime": "19:00",
            "endTime": "22:00",
            "description": "친구 생일 축하",
            "location": "친구 집",
            "category": "개인",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        },
        {
            "id": "80d85368-b4a4-47b3-b959-25171d49371f",
            "title": "운동",
            "date": "2024-11-22",
            "startTime": "18:00",
            "endTime": "19:00",
            "description": "주간 운동",
            "location": "헬스장",
            "category": "개인",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 1
        }
    ]"#,
    )
    .expect("fixture JSON is valid")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn month_view_shows_only_the_current_month() {
    let events = fixture_events();

    let september = filtered_events(&events, "", date(2024, 9, 1), CalendarView::Month);
    assert_eq!(
        ids(&september),
        [
            "2b7545a6-ebee-426c-b906-2329bc8d62bd",
            "09702fb3-a478-40b3-905e-9ab3c8849dcd"
        ]
    );

    let october = filtered_events(&events, "", date(2024, 10, 7), CalendarView::Month);
    assert_eq!(
        ids(&october),
        [
            "da3ca408-836a-4d98-b67a-ca389d07552b",
            "dac62941-69e5-4ec0-98cc-24c2a79a7f81"
        ]
    );
}

#[test]
fn week_view_narrows_further_than_month_view() {
    let events = fixture_events();

    // Week of Sep 1: only the team meeting on that Sunday
    let week = filtered_events(&events, "", date(2024, 9, 1), CalendarView::Week);
    assert_eq!(ids(&week), ["2b7545a6-ebee-426c-b906-2329bc8d62bd"]);

    // Week of Oct 7 (Mon): the birthday party on Oct 8
    let week = filtered_events(&events, "", date(2024, 10, 7), CalendarView::Week);
    assert_eq!(ids(&week), ["dac62941-69e5-4ec0-98cc-24c2a79a7f81"]);
}

#[test]
fn changing_the_search_term_swaps_the_result_set() {
    let events = fixture_events();
    let reference = date(2024, 9, 1);

    let all = filtered_events(&events, "", reference, CalendarView::Month);
    assert_eq!(all.len(), 2);

    let meetings = filtered_events(&events, "회의", reference, CalendarView::Month);
    assert_eq!(ids(&meetings), ["2b7545a6-ebee-426c-b906-2329bc8d62bd"]);

    let lunch = filtered_events(&events, "점심", reference, CalendarView::Month);
    assert_eq!(ids(&lunch), ["09702fb3-a478-40b3-905e-9ab3c8849dcd"]);
}

#[test]
fn search_reaches_descriptions_and_locations() {
    let events = fixture_events();
    let reference = date(2024, 10, 1);

    let by_description =
        filtered_events(&events, "분기별 프로젝트 마감", reference, CalendarView::Month);
    assert_eq!(ids(&by_description), ["da3ca408-836a-4d98-b67a-ca389d07552b"]);

    let by_location = filtered_events(&events, "친구 집", reference, CalendarView::Month);
    assert_eq!(ids(&by_location), ["dac62941-69e5-4ec0-98cc-24c2a79a7f81"]);
}

#[test]
fn visible_events_feed_the_notification_scan() {
    let events = fixture_events();
    let visible = filtered_events(&events, "", date(2024, 10, 1), CalendarView::Month);

    // One minute of lead time before the 09:00 project deadline
    let now = NaiveDateTime::parse_from_str("2024-10-01T08:59", "%Y-%m-%dT%H:%M").unwrap();
    let due = upcoming_events(&visible, now, &[]);
    assert_eq!(ids(&due), ["da3ca408-836a-4d98-b67a-ca389d07552b"]);
    assert_eq!(
        notification_message(&due[0]),
        "1분 후 프로젝트 마감 일정이 시작됩니다."
    );

    // Once it is marked notified nothing is due
    let notified = vec!["da3ca408-836a-4d98-b67a-ca389d07552b".to_string()];
    assert!(upcoming_events(&visible, now, &notified).is_empty());
}
