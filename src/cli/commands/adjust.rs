use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::core::ledger::Adjustment;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use crate::utils::date;
use crate::utils::time;

/// Handle the `adjust` command: parse and validate the approved correction,
/// then hand it to the applier. Malformed dates, times or kinds are rejected
/// here, before anything is loaded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust {
        date,
        kind,
        time: new_time,
        punch,
    } = cmd
    {
        let adj_date =
            date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let target = PunchKind::pk_from_str(kind)
            .filter(|k| k.is_adjustable())
            .ok_or_else(|| {
                AppError::InvalidKind(format!("'{}'. Use 'in' or 'out'", kind))
            })?;

        let adj_time = time::parse_required_time(new_time)?;

        let adj = Adjustment {
            date: adj_date,
            target,
            new_time: adj_time,
            punch_id: *punch,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        AdjustLogic::apply(&mut pool, cfg, &adj)?;
    }
    Ok(())
}
