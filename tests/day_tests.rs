use chrono::NaiveDate;
use studiobook::core::day::build_day_schedule;
use studiobook::models::booking::Booking;
use studiobook::models::slot::TimeSlot;
use studiobook::models::space::Space;
use studiobook::models::status::BookingStatus;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn booking(
    date: NaiveDate,
    space: Space,
    start_hour: u32,
    duration: i64,
    status: BookingStatus,
) -> Booking {
    let mut b = Booking::new(
        0,
        date,
        TimeSlot::new(start_hour),
        duration,
        space,
        String::new(),
    );
    b.status = status;
    b
}

fn labels(slots: &[TimeSlot]) -> Vec<String> {
    slots.iter().map(|s| s.label()).collect()
}

#[test]
fn empty_day_is_fully_available() {
    let schedule = build_day_schedule(day(2030, 7, 4), Space::PrincipalZone, &[]);

    assert!(schedule.occupied.is_empty());
    assert!(schedule.pending.is_empty());
    assert_eq!(schedule.available.len(), 14); // 08:00..22:00
    assert_eq!(schedule.available.first().unwrap().label(), "08:00");
    assert_eq!(schedule.available.last().unwrap().label(), "21:00");
}

#[test]
fn partitions_cover_the_grid_without_overlap() {
    let d = day(2030, 7, 4);
    let bookings = vec![
        booking(d, Space::PrincipalZone, 10, 2, BookingStatus::Confirmed),
        booking(d, Space::PrincipalZone, 13, 1, BookingStatus::Pending),
        booking(d, Space::PrincipalZone, 15, 2, BookingStatus::Cancelled),
    ];

    let schedule = build_day_schedule(d, Space::PrincipalZone, &bookings);

    assert_eq!(labels(&schedule.occupied), vec!["10:00", "11:00"]);
    assert_eq!(labels(&schedule.pending), vec!["13:00"]);

    // cancelled booking is inert: 15:00 and 16:00 stay available
    assert!(labels(&schedule.available).contains(&"15:00".to_string()));
    assert!(labels(&schedule.available).contains(&"16:00".to_string()));

    assert_eq!(
        schedule.occupied.len() + schedule.pending.len() + schedule.available.len(),
        14
    );
}

#[test]
fn confirmed_wins_over_pending_on_the_same_slot() {
    let d = day(2030, 7, 4);
    let bookings = vec![
        booking(d, Space::PrincipalZone, 10, 2, BookingStatus::Confirmed),
        booking(d, Space::PrincipalZone, 11, 2, BookingStatus::Pending),
    ];

    let schedule = build_day_schedule(d, Space::PrincipalZone, &bookings);

    assert_eq!(labels(&schedule.occupied), vec!["10:00", "11:00"]);
    assert_eq!(labels(&schedule.pending), vec!["12:00"]);
}

#[test]
fn other_spaces_and_dates_are_ignored() {
    let d = day(2030, 7, 4);
    let bookings = vec![
        booking(d, Space::NaturalLight, 10, 2, BookingStatus::Confirmed),
        booking(
            day(2030, 7, 5),
            Space::PrincipalZone,
            12,
            2,
            BookingStatus::Confirmed,
        ),
    ];

    let schedule = build_day_schedule(d, Space::PrincipalZone, &bookings);

    assert!(schedule.occupied.is_empty());
    assert!(schedule.pending.is_empty());
    assert_eq!(schedule.available.len(), 14);
}

#[test]
fn schedule_serializes_slot_labels() {
    let d = day(2030, 7, 4);
    let bookings = vec![booking(
        d,
        Space::PrincipalZone,
        10,
        1,
        BookingStatus::Confirmed,
    )];

    let schedule = build_day_schedule(d, Space::PrincipalZone, &bookings);
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["date"], serde_json::json!("2030-07-04"));
    assert_eq!(json["space"], serde_json::json!("principal-zone"));
    assert_eq!(json["occupied"], serde_json::json!(["10:00"]));
}
