use crate::config::Config;
use crate::core::bank::format_bank;
use crate::core::restore_ledger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::mins2readable;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let ledger = restore_ledger(&pool, cfg)?;
    let bank = ledger.bank();

    println!("Bank of hours: {}", format_bank(bank.balance_minutes));
    println!(
        "  {} closed day{}, {} worked, expected {}/day",
        bank.counted_days,
        if bank.counted_days == 1 { "" } else { "s" },
        mins2readable(bank.worked_minutes, false, true),
        mins2readable(ledger.expected_per_day(), false, true),
    );
    Ok(())
}
