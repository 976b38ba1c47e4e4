//! Unit tests for service time aggregation

use super::*;
use crate::storage::TransitionEvent;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_no_events_is_zero_days() {
    assert_eq!(service_days(&[], date("2025-07-01")), 0);
}

#[test]
fn test_closed_span_round_trip() {
    let events = vec![
        TransitionEvent::called_up(date("2025-03-27")),
        TransitionEvent::sent_down(date("2025-06-01")),
    ];

    // 2025-03-27 through 2025-06-01 is 66 days
    assert_eq!(service_days(&events, date("2025-07-01")), 66);
}

#[test]
fn test_reference_before_call_up_is_zero() {
    let events = vec![TransitionEvent::called_up(date("2025-03-27"))];

    assert_eq!(service_days(&events, date("2025-03-01")), 0);
}

#[test]
fn test_open_span_accrues_progressively() {
    let events = vec![TransitionEvent::called_up(date("2025-03-27"))];

    assert_eq!(service_days(&events, date("2025-03-27")), 0);
    assert_eq!(service_days(&events, date("2025-03-28")), 1);
    assert_eq!(service_days(&events, date("2025-04-27")), 31);
}

#[test]
fn test_closed_span_stops_accruing_after_send_down() {
    let events = vec![
        TransitionEvent::called_up(date("2025-03-27")),
        TransitionEvent::sent_down(date("2025-06-01")),
    ];

    // Same total whether queried the day of the demotion or weeks later
    assert_eq!(service_days(&events, date("2025-06-01")), 66);
    assert_eq!(service_days(&events, date("2025-09-01")), 66);
}

#[test]
fn test_still_active_player_accrues_through_reference() {
    let events = vec![TransitionEvent::called_up(date("2025-04-01"))];

    assert_eq!(service_days(&events, date("2025-04-11")), 10);
}

#[test]
fn test_unordered_input_yields_identical_total() {
    let ordered = vec![
        TransitionEvent::called_up(date("2025-03-27")),
        TransitionEvent::sent_down(date("2025-06-01")),
    ];
    let reversed: Vec<_> = ordered.iter().copied().rev().collect();

    let as_of = date("2025-07-01");
    assert_eq!(
        service_days(&ordered, as_of),
        service_days(&reversed, as_of)
    );
}

#[test]
fn test_multiple_spans_sum() {
    let events = vec![
        TransitionEvent::called_up(date("2025-04-01")),
        TransitionEvent::sent_down(date("2025-04-11")),
        TransitionEvent::called_up(date("2025-05-01")),
        TransitionEvent::sent_down(date("2025-05-06")),
    ];

    assert_eq!(service_days(&events, date("2025-07-01")), 15);
}

#[test]
fn test_repeated_call_up_overwrites_anchor() {
    // Later call-up wins; the earlier partial span is discarded.
    let events = vec![
        TransitionEvent::called_up(date("2025-04-01")),
        TransitionEvent::called_up(date("2025-05-01")),
        TransitionEvent::sent_down(date("2025-05-11")),
    ];

    assert_eq!(service_days(&events, date("2025-07-01")), 10);
}

#[test]
fn test_orphan_send_down_is_ignored() {
    let events = vec![TransitionEvent::sent_down(date("2025-05-01"))];

    assert_eq!(service_days(&events, date("2025-07-01")), 0);
}

#[test]
fn test_orphan_send_down_before_real_span() {
    let events = vec![
        TransitionEvent::sent_down(date("2025-03-01")),
        TransitionEvent::called_up(date("2025-04-01")),
    ];

    assert_eq!(service_days(&events, date("2025-04-11")), 10);
}

#[test]
fn test_summarize_covers_every_player() {
    let mut map = EventMap::new();
    map.insert(
        "Gunnar Henderson".to_string(),
        vec![TransitionEvent::called_up(date("2025-03-27"))],
    );
    map.insert(
        "Coby Mayo".to_string(),
        vec![
            TransitionEvent::called_up(date("2025-04-01")),
            TransitionEvent::sent_down(date("2025-04-11")),
        ],
    );
    map.insert("Samuel Basallo".to_string(), vec![]);

    let summary = summarize(&map, date("2025-04-27"));

    assert_eq!(summary.len(), 3);
    assert_eq!(summary["Gunnar Henderson"].service_days, 31);
    assert_eq!(summary["Coby Mayo"].service_days, 10);
    assert_eq!(summary["Samuel Basallo"].service_days, 0);
}

#[test]
fn test_summary_serializes_to_reporting_shape() {
    let mut map = EventMap::new();
    map.insert(
        "Coby Mayo".to_string(),
        vec![
            TransitionEvent::called_up(date("2025-04-01")),
            TransitionEvent::sent_down(date("2025-04-11")),
        ],
    );

    let summary = summarize(&map, date("2025-07-01"));
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["Coby Mayo"]["service_days"], 10);
}
