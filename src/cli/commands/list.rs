use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_recorded_dates;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, punches } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let dates = resolve_period(&mut pool, period)?;
        ListLogic::print(&mut pool, cfg, &dates, *punches)?;
    }
    Ok(())
}

fn resolve_period(pool: &mut DbPool, period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p == "all" {
            return load_recorded_dates(&pool.conn);
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
