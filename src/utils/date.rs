//! Date helpers for booking periods: a period token is a single day
//! ("YYYY-MM-DD"), a whole month ("YYYY-MM") or a whole year ("YYYY"),
//! and expands into the explicit list of dates it covers.

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Walk forward day by day from `start` while `keep` holds.
fn days_while(start: NaiveDate, keep: impl Fn(&NaiveDate) -> bool) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while keep(&d) {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => days_while(first, |d| d.year() == year && d.month() == month),
        None => Vec::new(),
    }
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(first) => days_while(first, |d| d.year() == year),
        None => Vec::new(),
    }
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok(all_days_of_month(first.year(), first.month()));
    }

    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

/// Every day from the first date of `start` through the last date of
/// `end`, each side being any valid period token.
pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().ok_or_else(|| format!("Invalid period: {}", start))?;
    let end_date = *e.last().ok_or_else(|| format!("Invalid period: {}", end))?;

    Ok(days_while(start_date, |d| *d <= end_date))
}

pub fn current_month_dates() -> Result<Vec<NaiveDate>, String> {
    let now = today();
    Ok(all_days_of_month(now.year(), now.month()))
}

/// Every date of the current year, for `list --period all`.
pub fn generate_all_dates() -> Result<Vec<NaiveDate>, String> {
    Ok(all_days_of_year(today().year()))
}
