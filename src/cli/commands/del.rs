use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date: date_str } = cmd {
        //
        // Delete by id
        //
        if let Some(booking_id) = id {
            let prompt = format!(
                "Delete booking #{}? This action is irreversible.",
                booking_id
            );

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            DeleteLogic::apply_id(&mut pool, *booking_id)?;
            success(format!("Booking #{} has been deleted.", booking_id));
            return Ok(());
        }

        //
        // Delete all bookings of a date
        //
        let raw = date_str
            .as_deref()
            .ok_or_else(|| AppError::Other("Provide a booking id or --date".to_string()))?;
        let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;

        let prompt = format!("Delete ALL bookings for {}? This action is irreversible.", d);

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let n = DeleteLogic::apply_date(&mut pool, d)?;
        success(format!("{} bookings for {} have been deleted.", n, d));
    }

    Ok(())
}
