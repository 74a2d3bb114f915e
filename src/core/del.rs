use crate::db::pool::DbPool;
use crate::db::queries::{delete_booking, load_booking, load_bookings_by_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one booking by id.
    pub fn apply_id(pool: &mut DbPool, id: i64) -> AppResult<()> {
        load_booking(&pool.conn, id)?.ok_or(AppError::BookingNotFound(id))?;

        delete_booking(pool, id)?;

        info(format!("Deleted booking #{}", id));
        Ok(())
    }

    /// Delete every booking recorded for a date, across all spaces.
    pub fn apply_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let bookings = load_bookings_by_date(pool, &date)?;

        if bookings.is_empty() {
            return Err(AppError::NoBookingsForDate(date_str));
        }

        let n = bookings.len();
        for b in &bookings {
            delete_booking(pool, b.id)?;
        }

        info(format!("Deleted all {} bookings for {}", n, date));
        Ok(n)
    }
}
