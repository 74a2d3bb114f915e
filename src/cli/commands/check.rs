use crate::cli::commands::add::resolve_space;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::{AvailabilityQuery, BookingWindow, resolve};
use crate::db::pool::DbPool;
use crate::db::queries::load_active_bookings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Validate one proposed booking without persisting anything.
/// Same three core functions as `day`, so the two views always agree.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        date,
        space,
        time,
        duration,
        json,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let space_final = resolve_space(space.as_deref(), cfg)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let existing = load_active_bookings(&mut pool, &d, space_final)?;
        let windows: Vec<BookingWindow> = existing.iter().map(|b| b.window()).collect();

        let query = AvailabilityQuery {
            date: d,
            space: space_final,
            time: time.clone(),
            duration: duration
                .clone()
                .or_else(|| Some(cfg.default_duration.clone())),
        };

        let verdict = resolve(&query, &windows, date::today());

        if *json {
            let payload = serde_json::to_string_pretty(&verdict)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", payload);
            return Ok(());
        }

        if verdict.available {
            success(format!(
                "{} at {} in {} is available",
                d,
                time,
                space_final.code()
            ));
        } else {
            let reason = verdict.reason.as_deref().unwrap_or("unavailable");
            warning(format!("Unavailable: {}", reason));
            if !verdict.conflicting_slots.is_empty() {
                println!("Conflicting slots: {}", verdict.conflict_labels().join(", "));
            }
        }
    }

    Ok(())
}
