use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::punch_kind::PunchKind;
use crate::utils::date;
use crate::utils::time;
use chrono::{Local, NaiveTime, Timelike};

/// Handle the four punch subcommands (`in`, `out`, `break-start`,
/// `break-end`). They share the same argument shape, so they share a handler.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, date_arg, at_arg, pos_arg) = match cmd {
        Commands::In { date, at, pos } => (PunchKind::ClockIn, date, at, pos),
        Commands::Out { date, at, pos } => (PunchKind::ClockOut, date, at, pos),
        Commands::BreakStart { date, at, pos } => (PunchKind::BreakStart, date, at, pos),
        Commands::BreakEnd { date, at, pos } => (PunchKind::BreakEnd, date, at, pos),
        _ => return Err(AppError::Other("unexpected command in punch handler".into())),
    };

    let punch_date = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    let punch_time = match time::parse_optional_time(at_arg.as_ref())? {
        Some(t) => t,
        // punches carry HH:MM precision, so "now" is truncated to the minute
        None => {
            let now = Local::now().time();
            NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
                .ok_or_else(|| AppError::Other("failed to truncate current time".into()))?
        }
    };

    let location = match pos_arg {
        Some(code) => Some(
            Location::from_code(code).ok_or_else(|| {
                AppError::InvalidLocation(format!(
                    "'{}'. Use a valid code such as 'O' (office), 'R' (remote) or 'C' (customer)",
                    code
                ))
            })?,
        ),
        None => None,
    };

    let mut pool = DbPool::new(&cfg.database)?;
    PunchLogic::apply(&mut pool, cfg, kind, punch_date, punch_time, location)
}
