use chrono::{NaiveDate, NaiveTime};

use crate::config::Config;
use crate::core::bank::format_bank;
use crate::core::restore_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, upsert_day_summary};
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{info, success};
use crate::utils::formatting::mins2readable;

/// High-level business logic for the punch subcommands (`in`, `out`,
/// `break-start`, `break-end`).
pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        kind: PunchKind,
        date: NaiveDate,
        time: NaiveTime,
        location: Option<Location>,
    ) -> AppResult<()> {
        let mut ledger = restore_ledger(pool, cfg)?;

        // Guard check + append; a rejection propagates before anything
        // touches the database.
        let appended = ledger.submit(date, time, kind, location)?;

        let rec = ledger
            .day(date)
            .ok_or_else(|| AppError::Ledger(format!("no day record for {date} after punch")))?;

        // Punches, day summary and audit line land in one transaction so a
        // reader never observes a partially-recomputed day.
        let tx = pool.conn.transaction()?;
        for punch in &appended {
            insert_punch(&tx, punch)?;
        }
        upsert_day_summary(&tx, rec)?;
        ttlog(
            &tx,
            "punch",
            &date.to_string(),
            &format!("{} at {}", kind.pk_as_str(), time.format("%H:%M")),
        )?;
        tx.commit()?;

        if appended.len() > 1 {
            info("Open break auto-closed at the clock-out time.");
        }
        success(format!(
            "{} recorded at {} on {}.",
            kind.pk_as_str(),
            time.format("%H:%M"),
            date
        ));

        if let Some(total) = rec.total_minutes {
            info(format!("Worked on {}: {}", date, mins2readable(total, false, true)));
        }
        info(format!(
            "Bank of hours: {}",
            format_bank(ledger.bank().balance_minutes)
        ));

        Ok(())
    }
}
