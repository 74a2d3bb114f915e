use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_bookings_by_date;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::space::Space;
use crate::models::status::BookingStatus;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;
use crate::utils::formatting::hours_label;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        space,
        status,
        now: l_now,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *l_now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let space_filter = space.as_deref().and_then(Space::from_code);
        let status_filter = status.as_deref().and_then(BookingStatus::from_code);

        let mut rows: Vec<Booking> = Vec::new();
        for d in dates {
            for b in load_bookings_by_date(&mut pool, &d)? {
                if let Some(sp) = space_filter
                    && b.space != sp
                {
                    continue;
                }
                if let Some(st) = status_filter
                    && b.status != st
                {
                    continue;
                }
                rows.push(b);
            }
        }

        if rows.is_empty() {
            println!("No bookings for the selected period.");
            return Ok(());
        }

        print_bookings(&rows, &cfg.separator_char);
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<chrono::NaiveDate>> {
    use crate::errors::AppError;

    if let Some(p) = period {
        if p == "all" {
            return date::generate_all_dates().map_err(AppError::InvalidDate);
        }

        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}

fn print_bookings(bookings: &[Booking], separator: &str) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 11),
        Column::new("SLOT", 6),
        Column::new("DUR", 4),
        Column::new("SPACE", 15),
        Column::new("STATUS", 10),
        Column::new("CLIENT", 20),
    ]);

    for b in bookings {
        table.add_row(vec![
            b.id.to_string(),
            b.date_str(),
            b.start_str(),
            hours_label(b.duration_hours),
            b.space.code().to_string(),
            {
                let status = b.status.to_db_str();
                format!("{}{}{}", color_for_status(status), status, RESET)
            },
            b.client.clone(),
        ]);
    }

    println!("{}", table.render(separator));
}
