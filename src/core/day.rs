//! Whole-day schedule: partition the booking grid of one date and space
//! into occupied, pending and available slots.

use crate::core::slots::{generate_slots, grid};
use crate::models::booking::Booking;
use crate::models::slot::TimeSlot;
use crate::models::space::Space;
use crate::models::status::BookingStatus;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub date: String,
    pub space: String,
    pub occupied: Vec<TimeSlot>,
    pub pending: Vec<TimeSlot>,
    pub available: Vec<TimeSlot>,
}

/// Build the slot partition for one date and space from the bookings on
/// record. Confirmed bookings mark a slot occupied; pending ones mark it
/// pending unless a confirmed booking already covers it; everything else
/// on the 08:00–22:00 grid is available. Cancelled and completed records
/// are inert.
///
/// Uses the same slot generator as the conflict detector, so the two
/// consumer shapes (day view and single-request check) can never disagree
/// about which slots a booking spans.
pub fn build_day_schedule(date: NaiveDate, space: Space, bookings: &[Booking]) -> DaySchedule {
    let mut occupied: BTreeSet<TimeSlot> = BTreeSet::new();
    let mut pending: BTreeSet<TimeSlot> = BTreeSet::new();

    for booking in bookings {
        if booking.date != date || booking.space != space || !booking.status.is_active() {
            continue;
        }

        let target = if booking.status == BookingStatus::Confirmed {
            &mut occupied
        } else {
            &mut pending
        };

        for slot in generate_slots(booking.start, booking.duration_hours) {
            target.insert(slot);
        }
    }

    // confirmed wins when both cover the same slot
    let pending: Vec<TimeSlot> = pending.difference(&occupied).copied().collect();

    let available: Vec<TimeSlot> = grid()
        .into_iter()
        .filter(|s| !occupied.contains(s) && !pending.contains(s))
        .collect();

    DaySchedule {
        date: date.format("%Y-%m-%d").to_string(),
        space: space.code().to_string(),
        occupied: occupied.into_iter().collect(),
        pending,
        available,
    }
}
