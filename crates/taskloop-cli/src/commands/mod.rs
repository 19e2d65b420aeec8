pub mod achievements;
pub mod agenda;
pub mod login;
pub mod task;
pub mod timer;

use std::error::Error;

use chrono::{Local, NaiveDate};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to the local date.
///
/// This is the only place the wall clock is read; the core always receives
/// an explicit date.
pub(crate) fn parse_date_or_today(arg: Option<&str>) -> Result<NaiveDate, Box<dyn Error>> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}").into()),
        None => Ok(Local::now().date_naive()),
    }
}
