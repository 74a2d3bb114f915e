use crate::core::slots::normalize_time;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::space::Space;
use crate::models::status::BookingStatus;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

pub fn load_bookings_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<Booking>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM bookings
         WHERE date = ?1
         ORDER BY space ASC, start_slot ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the bookings that occupy slots for one date and space: only
/// pending and confirmed records take part in availability checks.
pub fn load_active_bookings(
    pool: &mut DbPool,
    date: &NaiveDate,
    space: Space,
) -> AppResult<Vec<Booking>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM bookings
         WHERE date = ?1 AND space = ?2 AND status IN ('pending','confirmed')
         ORDER BY start_slot ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![date_str, space.to_db_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Booking> {
    let date_str: String = row.get("date")?;
    let slot_str: String = row.get("start_slot")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start = normalize_time(&slot_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(slot_str.clone())),
        )
    })?;

    let space_str: String = row.get("space")?;
    let space = Space::from_db_str(&space_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSpace(space_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = BookingStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Booking {
        id: row.get("id")?,
        date,
        start,
        duration_hours: row.get("duration_hours")?,
        space,
        status,
        client: row.get("client")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_booking(conn: &Connection, b: &Booking) -> AppResult<()> {
    conn.execute(
        "INSERT INTO bookings (date, start_slot, duration_hours, space, status, client, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            b.date.format("%Y-%m-%d").to_string(),
            b.start.label(),
            b.duration_hours,
            b.space.to_db_str(),
            b.status.to_db_str(),
            b.client,
            b.source,
            b.created_at,
        ],
    )?;
    Ok(())
}

pub fn load_booking(conn: &Connection, id: i64) -> AppResult<Option<Booking>> {
    let mut stmt = conn.prepare("SELECT * FROM bookings WHERE id = ?1")?;
    let booking = stmt.query_row([id], map_row).optional()?;
    Ok(booking)
}

pub fn update_booking_status(conn: &Connection, id: i64, status: BookingStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE bookings SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

pub fn delete_booking(pool: &mut DbPool, id: i64) -> Result<()> {
    pool.conn
        .execute("DELETE FROM bookings WHERE id = ?", [id])?;
    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
