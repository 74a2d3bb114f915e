use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::BookingStatus;
use crate::ui::messages::success;

/// Change the status of a booking. Admin action: the availability
/// resolver never transitions a booking itself.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { id, status } = cmd {
        let new_status = BookingStatus::from_code(status).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "Unknown status '{}'. Use one of: pending, confirmed, cancelled, completed",
                status
            ))
        })?;

        let mut pool = DbPool::new(&cfg.database)?;
        let booking = StatusLogic::apply(&mut pool, *id, new_status)?;

        success(format!(
            "Booking #{} ({} {} in {}) is now {}",
            booking.id,
            booking.date_str(),
            booking.start_str(),
            booking.space.code(),
            new_status.to_db_str()
        ));
    }

    Ok(())
}
