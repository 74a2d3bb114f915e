use super::{slot::TimeSlot, space::Space, status::BookingStatus};
use crate::core::availability::BookingWindow;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub date: NaiveDate,         // ⇔ bookings.date (TEXT "YYYY-MM-DD")
    pub start: TimeSlot,         // ⇔ bookings.start_slot (TEXT "HH:00")
    pub duration_hours: i64,     // ⇔ bookings.duration_hours (INT)
    pub space: Space,            // ⇔ bookings.space (slug)
    pub status: BookingStatus,   // ⇔ bookings.status
    pub client: String,          // ⇔ bookings.client (TEXT, default '')
    pub source: String,          // ⇔ bookings.source (TEXT, default 'cli')
    pub created_at: String,      // ⇔ bookings.created_at (TEXT, ISO8601)
}

impl Booking {
    /// High-level constructor for bookings submitted through the CLI.
    /// - Sets `status = Pending` (admin actions move it further)
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        id: i64,
        date: NaiveDate,
        start: TimeSlot,
        duration_hours: i64,
        space: Space,
        client: String,
    ) -> Self {
        Self {
            id,
            date,
            start,
            duration_hours,
            space,
            status: BookingStatus::Pending,
            client,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.label()
    }

    /// The value-type view of this record consumed by the availability
    /// resolver. Status is deliberately not part of it; callers filter on
    /// `status.is_active()` before building windows.
    pub fn window(&self) -> BookingWindow {
        BookingWindow {
            date: self.date,
            space: self.space,
            start: self.start,
            duration_hours: self.duration_hours,
        }
    }
}
