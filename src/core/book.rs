use crate::core::availability::{AvailabilityQuery, AvailabilityResult, BookingWindow, resolve};
use crate::core::slots::{normalize_time, parse_duration};
use crate::db::log::sblog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_booking, load_active_bookings};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::utils::date;

/// High-level business logic for the `add` command.
pub struct BookLogic;

impl BookLogic {
    /// Fetch the active bookings for the requested date and space, run the
    /// availability resolver, and persist a new pending booking when the
    /// verdict is available. Returns the verdict either way so the caller
    /// can report the reason.
    ///
    /// The availability check and the insert are two separate statements
    /// with no transaction spanning them; two concurrent writers can both
    /// observe "available" before either commits. Legacy behavior, kept
    /// as-is (see DESIGN.md).
    pub fn apply(
        pool: &mut DbPool,
        query: &AvailabilityQuery,
        client: &str,
    ) -> AppResult<AvailabilityResult> {
        let existing = load_active_bookings(pool, &query.date, query.space)?;
        let windows: Vec<BookingWindow> = existing.iter().map(|b| b.window()).collect();

        let verdict = resolve(query, &windows, date::today());
        if !verdict.available {
            return Ok(verdict);
        }

        // resolve() accepted the request, so both parses succeed here
        let start = normalize_time(&query.time)
            .ok_or_else(|| AppError::InvalidTime(query.time.clone()))?;
        let duration = parse_duration(query.duration.as_deref())
            .ok_or_else(|| AppError::InvalidDuration(query.duration.clone().unwrap_or_default()))?;

        let booking = Booking::new(0, query.date, start, duration, query.space, client.to_string());
        insert_booking(&pool.conn, &booking)?;

        // internal audit log (non blocking)
        if let Err(e) = sblog(
            &pool.conn,
            "add",
            &format!("{} {}", booking.date_str(), booking.start_str()),
            &format!(
                "Booked {} for {}h in {}",
                booking.date_str(),
                booking.duration_hours,
                booking.space.code()
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(verdict)
    }
}
