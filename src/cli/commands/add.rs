use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::AvailabilityQuery;
use crate::core::book::BookLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::space::Space;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Submit a booking request; persisted only when the slot is free.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        space,
        time,
        duration,
        client,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse space (default from config)
        //
        let space_final = resolve_space(space.as_deref(), cfg)?;

        //
        // 3. Duration falls back to the configured default ("1h")
        //
        let duration_final = duration
            .clone()
            .or_else(|| Some(cfg.default_duration.clone()));

        //
        // 4. Open DB and run the booking logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let query = AvailabilityQuery {
            date: d,
            space: space_final,
            time: time.clone(),
            duration: duration_final,
        };

        let verdict = BookLogic::apply(&mut pool, &query, client.as_deref().unwrap_or(""))?;

        if verdict.available {
            success(format!(
                "Booked {} at {} in {} ({})",
                d,
                time,
                space_final.code(),
                query.duration.as_deref().unwrap_or("1h"),
            ));
        } else {
            let reason = verdict.reason.as_deref().unwrap_or("unavailable");
            warning(format!("Not booked: {}", reason));
            if !verdict.conflicting_slots.is_empty() {
                println!("Conflicting slots: {}", verdict.conflict_labels().join(", "));
            }
        }
    }

    Ok(())
}

pub fn resolve_space(code: Option<&str>, cfg: &Config) -> AppResult<Space> {
    match code {
        Some(c) => Space::from_code(c).ok_or_else(|| {
            AppError::InvalidSpace(format!(
                "Unknown space '{}'. Use one of: principal-zone, natural-light, cyclorama, darkroom",
                c
            ))
        }),
        None => Space::from_code(&cfg.default_space).ok_or_else(|| {
            AppError::Config(format!(
                "default_space '{}' in the config file is not a valid space",
                cfg.default_space
            ))
        }),
    }
}
