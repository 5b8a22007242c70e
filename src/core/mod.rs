pub mod adjust;
pub mod bank;
pub mod guards;
pub mod intervals;
pub mod ledger;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;
pub mod totals;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_punches;
use crate::errors::AppResult;
use ledger::PunchLedger;

/// Restore the in-memory ledger from the persisted punches and the
/// configured policy. Every command starts here.
pub fn restore_ledger(pool: &DbPool, cfg: &Config) -> AppResult<PunchLedger> {
    let mut ledger = PunchLedger::new(cfg.expected_minutes()?, cfg.holiday_dates()?);
    ledger.restore(load_all_punches(&pool.conn)?)?;
    Ok(ledger)
}
