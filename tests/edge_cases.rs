//! Edge case tests for chatscope
//!
//! These tests cover boundary conditions that might not be covered by
//! regular unit and integration tests.

use chatscope::prelude::*;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

// =========================================================================
// Window boundary conditions
// =========================================================================

#[test]
fn test_message_exactly_at_lower_bound_is_admitted() {
    let now = fixed_now();
    let boundary = (now - TimeDelta::days(7)).with_timezone(&Utc);
    let messages = vec![Message::new(1, boundary)];

    let report = run(&messages, Period::Last7Days, now);
    assert_eq!(report.stats.total_messages, 1);
}

#[test]
fn test_message_one_second_before_lower_bound_is_excluded() {
    let now = fixed_now();
    let just_outside = (now - TimeDelta::days(7) - TimeDelta::seconds(1)).with_timezone(&Utc);
    let messages = vec![Message::new(1, just_outside)];

    let report = run(&messages, Period::Last7Days, now);
    assert!(report.is_empty());
}

#[test]
fn test_future_dated_message_passes_open_windows() {
    let now = fixed_now();
    let tomorrow = (now + TimeDelta::days(1)).with_timezone(&Utc);
    let messages = vec![Message::new(1, tomorrow)];

    assert_eq!(run(&messages, Period::Last7Days, now).stats.total_messages, 1);
    assert_eq!(run(&messages, Period::ThisMonth, now).stats.total_messages, 1);
    assert_eq!(run(&messages, Period::AllTime, now).stats.total_messages, 1);
    // But not the closed Last Month range.
    assert!(run(&messages, Period::LastMonth, now).is_empty());
}

#[test]
fn test_last_month_upper_bound_is_midnight_of_last_day() {
    let now = fixed_now();
    // Midnight of May 31 is inside; one second past it is not.
    let at_bound = Local
        .with_ymd_and_hms(2024, 5, 31, 0, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let past_bound = at_bound + TimeDelta::seconds(1);

    let messages = vec![Message::new(1, at_bound), Message::new(2, past_bound)];
    let report = run(&messages, Period::LastMonth, now);
    assert_eq!(report.stats.total_messages, 1);
}

// =========================================================================
// Aggregation edge cases
// =========================================================================

#[test]
fn test_local_midnight_splits_buckets() {
    let before = Local
        .with_ymd_and_hms(2024, 6, 14, 23, 59, 59)
        .unwrap()
        .with_timezone(&Utc);
    let after = Local
        .with_ymd_and_hms(2024, 6, 15, 0, 0, 0)
        .unwrap()
        .with_timezone(&Utc);

    let messages = vec![Message::new(1, before), Message::new(2, after)];
    let (_, daily) = aggregate(&messages);
    assert_eq!(daily.len(), 2);
    assert!(daily[0].date < daily[1].date);
}

#[test]
fn test_shuffled_and_reversed_orders_produce_identical_breakdown() {
    let now = fixed_now();
    let make = |id: u64, days: i64| {
        Message::new(id, (now - TimeDelta::days(days)).with_timezone(&Utc))
    };

    let forward = vec![make(1, 3), make(2, 2), make(3, 1)];
    let reversed = vec![make(3, 1), make(2, 2), make(1, 3)];
    let shuffled = vec![make(2, 2), make(1, 3), make(3, 1)];

    let (_, a) = aggregate(&forward);
    let (_, b) = aggregate(&reversed);
    let (_, c) = aggregate(&shuffled);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_duplicate_ids_are_counted_separately() {
    // The pipeline never deduplicates; ids are opaque to it.
    let ts = fixed_now().with_timezone(&Utc);
    let messages = vec![Message::new(7, ts), Message::new(7, ts)];
    let (stats, _) = aggregate(&messages);
    assert_eq!(stats.total_messages, 2);
}

// =========================================================================
// Classification edge cases
// =========================================================================

#[test]
fn test_unknown_entity_kinds_are_direct() {
    let ts = fixed_now().with_timezone(&Utc);
    let msg = Message::new(1, ts)
        .with_entity(TextEntity::new("bold", "loud"))
        .with_entity(TextEntity::new("spoiler", "secret"))
        .with_entity(TextEntity::new("mention", "@alice"));
    assert_eq!(msg.classification(), Classification::Direct);
}

#[test]
fn test_multiple_links_still_one_pr() {
    let ts = fixed_now().with_timezone(&Utc);
    let msg = Message::new(1, ts)
        .with_entity(TextEntity::new("link", "https://a.example"))
        .with_entity(TextEntity::new("text_link", "b"));
    assert_eq!(msg.classification(), Classification::Pr);

    let (stats, _) = aggregate(std::iter::once(&msg));
    assert_eq!(stats.pr_messages, 1);
}

#[test]
fn test_unicode_full_text() {
    let ts = fixed_now().with_timezone(&Utc);
    let msg = Message::new(1, ts)
        .with_entity(TextEntity::new("plain", "Привет "))
        .with_entity(TextEntity::new("plain", "🌍 "))
        .with_entity(TextEntity::new("plain", "こんにちは"));
    assert_eq!(msg.full_text(), "Привет 🌍 こんにちは");
    assert_eq!(msg.classification(), Classification::Direct);
}

#[test]
fn test_link_kind_is_exact_match() {
    let ts = fixed_now().with_timezone(&Utc);
    // Near-miss kinds must not classify as PR.
    for kind in ["Link", "LINK", "hyperlink", "text-link", "links"] {
        let msg = Message::new(1, ts).with_entity(TextEntity::new(kind, "x"));
        assert_eq!(msg.classification(), Classification::Direct, "kind {kind}");
    }
}

// =========================================================================
// Ingestion edge cases
// =========================================================================

#[test]
fn test_entityless_messages_count_as_direct() {
    let content = r#"{"messages": [
        {"id": 1, "date_unixtime": "1705314600", "text_entities": []}
    ]}"#;
    let export = ingest::parse_str(content).unwrap();
    let report = run(&export.messages, Period::AllTime, fixed_now());
    assert_eq!(report.stats.direct_messages, 1);
}

#[test]
fn test_negative_unixtime_accepted() {
    // Pre-1970 timestamps are valid instants.
    let content = r#"{"messages": [
        {"id": 1, "date_unixtime": "-86400", "text_entities": []}
    ]}"#;
    let export = ingest::parse_str(content).unwrap();
    assert_eq!(export.messages[0].timestamp.timestamp(), -86400);
}

#[test]
fn test_whole_export_rejected_on_one_bad_record() {
    let content = r#"{"messages": [
        {"id": 1, "date_unixtime": "1705314600", "text_entities": []},
        {"id": 2, "text_entities": []}
    ]}"#;
    let err = ingest::parse_str(content).unwrap_err();
    assert!(err.is_invalid_format());
    assert!(err.to_string().contains("message 2"));
}
