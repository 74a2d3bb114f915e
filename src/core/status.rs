use crate::db::log::sblog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_booking, update_booking_status};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::status::BookingStatus;

/// High-level business logic for the `status` command.
/// Status transitions are an admin action; the availability resolver never
/// changes a booking's status itself.
pub struct StatusLogic;

impl StatusLogic {
    pub fn apply(pool: &mut DbPool, id: i64, new_status: BookingStatus) -> AppResult<Booking> {
        let booking = load_booking(&pool.conn, id)?.ok_or(AppError::BookingNotFound(id))?;

        update_booking_status(&pool.conn, id, new_status)?;

        if let Err(e) = sblog(
            &pool.conn,
            "status",
            &id.to_string(),
            &format!(
                "Booking #{} moved from {} to {}",
                id,
                booking.status.to_db_str(),
                new_status.to_db_str()
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(Booking {
            status: new_status,
            ..booking
        })
    }
}
