use studiobook::core::slots::{
    CLOSING_HOUR, OPENING_HOUR, generate_slots, grid, normalize_time, parse_duration,
};
use studiobook::models::slot::TimeSlot;

#[test]
fn normalize_accepts_bare_hour() {
    let slot = normalize_time("9").expect("should parse");
    assert_eq!(slot.label(), "09:00");
}

#[test]
fn normalize_truncates_minutes_not_rounds() {
    let slot = normalize_time("14:55").expect("should parse");
    assert_eq!(slot.hour(), 14);
}

#[test]
fn normalize_accepts_seconds() {
    let slot = normalize_time("08:15:59").expect("should parse");
    assert_eq!(slot.label(), "08:00");
}

#[test]
fn normalize_rejects_out_of_range_hours() {
    assert!(normalize_time("24:00").is_none());
    assert!(normalize_time("99").is_none());
}

#[test]
fn normalize_rejects_garbage() {
    assert!(normalize_time("").is_none());
    assert!(normalize_time("noon").is_none());
    assert!(normalize_time("14:xx").is_none());
}

#[test]
fn duration_defaults_to_one_hour() {
    assert_eq!(parse_duration(None), Some(1));
    assert_eq!(parse_duration(Some("")), Some(1));
    assert_eq!(parse_duration(Some("   ")), Some(1));
}

#[test]
fn duration_parses_bare_integers_and_suffixed_hours() {
    assert_eq!(parse_duration(Some("2")), Some(2));
    assert_eq!(parse_duration(Some("2h")), Some(2));
    assert_eq!(parse_duration(Some("3H")), Some(3));
}

#[test]
fn duration_keeps_non_positive_values_for_later_rejection() {
    // the availability rules reject these, the parser must not clamp them
    assert_eq!(parse_duration(Some("0h")), Some(0));
    assert_eq!(parse_duration(Some("-3h")), Some(-3));
}

#[test]
fn duration_rejects_garbage() {
    assert_eq!(parse_duration(Some("h")), None);
    assert_eq!(parse_duration(Some("two")), None);
}

#[test]
fn generated_sequence_has_exactly_duration_slots() {
    for (start, duration) in [(8u32, 1i64), (10, 3), (14, 2), (20, 2)] {
        let slots = generate_slots(TimeSlot::new(start), duration);
        assert_eq!(slots.len(), duration as usize);
    }
}

#[test]
fn generated_slots_are_contiguous() {
    let slots = generate_slots(TimeSlot::new(9), 5);
    for pair in slots.windows(2) {
        assert_eq!(pair[1].hour(), pair[0].hour() + 1);
    }
}

#[test]
fn generator_yields_nothing_for_non_positive_durations() {
    assert!(generate_slots(TimeSlot::new(10), 0).is_empty());
    assert!(generate_slots(TimeSlot::new(10), -2).is_empty());
}

#[test]
fn generator_does_not_truncate_at_closing() {
    // the closing-time rule lives in the resolver, not here
    let slots = generate_slots(TimeSlot::new(21), 3);
    let hours: Vec<u32> = slots.iter().map(|s| s.hour()).collect();
    assert_eq!(hours, vec![21, 22, 23]);
}

#[test]
fn grid_spans_opening_to_closing_exclusive() {
    let g = grid();
    assert_eq!(g.first().map(|s| s.hour()), Some(OPENING_HOUR));
    assert_eq!(g.last().map(|s| s.hour()), Some(CLOSING_HOUR - 1));
    assert_eq!(g.len() as u32, CLOSING_HOUR - OPENING_HOUR);
}

#[test]
fn slot_labels_are_zero_padded() {
    assert_eq!(TimeSlot::new(8).label(), "08:00");
    assert_eq!(TimeSlot::new(15).to_string(), "15:00");
}
