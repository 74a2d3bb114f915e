use crate::cli::commands::add::resolve_space;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day::build_day_schedule;
use crate::core::slots::grid;
use crate::db::pool::DbPool;
use crate::db::queries::load_bookings_by_date;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::table::{Column, Table};

/// Show the occupied / pending / available slot partition for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, space, json } = cmd {
        let d = crate::utils::date::parse_date(date)
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let space_final = resolve_space(space.as_deref(), cfg)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let bookings = load_bookings_by_date(&mut pool, &d)?;

        let schedule = build_day_schedule(d, space_final, &bookings);

        if *json {
            let payload = serde_json::to_string_pretty(&schedule)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", payload);
            return Ok(());
        }

        let (space_name, _) = crate::utils::describe_space(&schedule.space);
        println!("\n=== {} | {} ===\n", schedule.date, space_name);

        let mut table = Table::new(vec![Column::new("SLOT", 6), Column::new("STATUS", 18)]);

        // walk the grid in order; each slot sits in exactly one partition
        for slot in grid() {
            let cell = if schedule.occupied.contains(&slot) {
                format!("{}occupied{}", GREEN, RESET)
            } else if schedule.pending.contains(&slot) {
                format!("{}pending{}", YELLOW, RESET)
            } else {
                format!("{}available{}", GREY, RESET)
            };
            table.add_row(vec![slot.label(), cell]);
        }

        println!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
