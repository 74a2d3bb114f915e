//! Availability resolver: slot-intersection conflict detection plus the
//! fixed-precedence business rules evaluated ahead of it.

use crate::core::slots::{CLOSING_HOUR, generate_slots, normalize_time, parse_duration};
use crate::models::slot::TimeSlot;
use crate::models::space::Space;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

/// Fixed reason strings surfaced to callers.
pub const REASON_DATE_PASSED: &str = "date has passed";
pub const REASON_INVALID_TIME: &str = "invalid time";
pub const REASON_INVALID_DURATION: &str = "invalid duration";
pub const REASON_OCCUPIED: &str = "the requested time is already occupied";

/// A booking's footprint on the grid: one date, one studio space, a
/// contiguous run of hourly slots. Plain value type, no status attached —
/// callers filter out cancelled/completed records before building windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWindow {
    pub date: NaiveDate,
    pub space: Space,
    pub start: TimeSlot,
    pub duration_hours: i64,
}

impl BookingWindow {
    pub fn occupied_slots(&self) -> Vec<TimeSlot> {
        generate_slots(self.start, self.duration_hours)
    }
}

/// One availability question, built per request and consumed once.
/// Time and duration stay raw strings here: they come straight off the
/// wire and are validated by [`resolve`] before any slot math runs.
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub space: Space,
    pub time: String,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResult {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "conflicts", skip_serializing_if = "Vec::is_empty")]
    pub conflicting_slots: Vec<TimeSlot>,
}

impl AvailabilityResult {
    pub fn free() -> Self {
        Self {
            available: true,
            reason: None,
            conflicting_slots: Vec::new(),
        }
    }

    pub fn rejected<T: Into<String>>(reason: T) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
            conflicting_slots: Vec::new(),
        }
    }

    pub fn conflict_labels(&self) -> Vec<String> {
        self.conflicting_slots.iter().map(|s| s.label()).collect()
    }
}

/// Pure slot-intersection conflict check.
///
/// Windows on a different date or in a different studio space never
/// conflict: two physically distinct spaces can be booked simultaneously.
/// Two windows on the same date and space conflict iff their occupied
/// slot sets share at least one slot. Slots are discrete hour buckets,
/// not continuous intervals, so a booking ending at 15:00 and one
/// starting at 15:00 do not overlap.
///
/// `conflicting_slots` in the result is the sorted union of overlapping
/// slots across all conflicting windows. Never mutates its inputs and
/// never touches storage.
pub fn detect(requested: &BookingWindow, existing: &[BookingWindow]) -> AvailabilityResult {
    let requested_slots: BTreeSet<TimeSlot> = requested.occupied_slots().into_iter().collect();

    let mut overlapping: BTreeSet<TimeSlot> = BTreeSet::new();

    for window in existing {
        if window.date != requested.date || window.space != requested.space {
            continue;
        }
        for slot in window.occupied_slots() {
            if requested_slots.contains(&slot) {
                overlapping.insert(slot);
            }
        }
    }

    if overlapping.is_empty() {
        return AvailabilityResult::free();
    }

    AvailabilityResult {
        available: false,
        reason: Some(REASON_OCCUPIED.to_string()),
        conflicting_slots: overlapping.into_iter().collect(),
    }
}

/// Run the business rules in their fixed precedence order, then the
/// conflict check. The first matching rule wins and short-circuits the
/// rest:
///
/// 1. requested date strictly before `today`
/// 2. raw time string is not a 24-hour "HH:MM"
/// 3. start + duration runs past the closing boundary (ending exactly at
///    closing is fine)
/// 4. duration is zero, negative or unparseable
/// 5. slot intersection against the supplied existing windows
///
/// `today` is passed in rather than read from the clock so the function
/// stays a pure computation of its inputs.
pub fn resolve(
    query: &AvailabilityQuery,
    existing: &[BookingWindow],
    today: NaiveDate,
) -> AvailabilityResult {
    // 1. past date
    if query.date < today {
        return AvailabilityResult::rejected(REASON_DATE_PASSED);
    }

    // 2. strict wire format for the requested time: two-digit hour,
    // two-digit minute, 24-hour clock
    let pattern = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
    if !pattern.is_match(query.time.trim()) {
        return AvailabilityResult::rejected(REASON_INVALID_TIME);
    }

    let start = match normalize_time(&query.time) {
        Some(s) => s,
        None => return AvailabilityResult::rejected(REASON_INVALID_TIME),
    };

    let duration = match parse_duration(query.duration.as_deref()) {
        Some(d) => d,
        None => return AvailabilityResult::rejected(REASON_INVALID_DURATION),
    };

    // 3. closing boundary, with the computed overflow end in the reason.
    // End arithmetic stays in i64: wire durations can be arbitrarily
    // large and must never overflow the hour math.
    let end_hour = (start.hour() as i64).saturating_add(duration);
    if end_hour > CLOSING_HOUR as i64 {
        return AvailabilityResult::rejected(format!(
            "booking would end at {:02}:00 but the studio closes at {}",
            end_hour,
            TimeSlot::new(CLOSING_HOUR).label()
        ));
    }

    // 4. non-positive durations are an explicit rejection, never clamped
    if duration <= 0 {
        return AvailabilityResult::rejected(REASON_INVALID_DURATION);
    }

    // 5. conflict check proper
    let requested = BookingWindow {
        date: query.date,
        space: query.space,
        start,
        duration_hours: duration,
    };

    detect(&requested, existing)
}
