use chrono::NaiveDate;

use crate::config::Config;
use crate::core::bank::format_bank;
use crate::core::guards::GuardCheck;
use crate::core::restore_ledger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::mins2readable;

/// Read-only preview of what the guards would allow on a date, plus the
/// day's current derived state. Polling this never mutates anything.
pub struct StatusLogic;

impl StatusLogic {
    pub fn print(pool: &mut DbPool, cfg: &Config, date: NaiveDate) -> AppResult<()> {
        let ledger = restore_ledger(pool, cfg)?;

        println!("Status for {}:", date);
        if ledger.is_holiday(date) {
            println!("  (holiday)");
        }

        print_check("clock-in", ledger.can_clock_in(date));
        print_check("clock-out", ledger.can_clock_out(date));
        print_check("break-start", ledger.can_start_break(date));
        print_check("break-end", ledger.can_end_break(date));

        if let Some(rec) = ledger.day(date) {
            println!();
            for punch in &rec.punches {
                let loc = punch
                    .location
                    .map(|l| format!(" [{}]", l.code()))
                    .unwrap_or_default();
                println!("  {} {}{}", punch.time_str(), punch.kind.pk_as_str(), loc);
            }
            match rec.total_minutes {
                Some(total) => {
                    println!("  worked: {}", mins2readable(total, false, true))
                }
                None => println!("  worked: (day not closed)"),
            }
        }

        println!(
            "  bank: {}",
            format_bank(ledger.bank().balance_minutes)
        );
        Ok(())
    }
}

fn print_check(label: &str, check: GuardCheck) {
    if check.ok {
        println!("  {:<12}: ok", label);
    } else {
        println!(
            "  {:<12}: blocked ({})",
            label,
            check.reason.unwrap_or_default()
        );
    }
}
