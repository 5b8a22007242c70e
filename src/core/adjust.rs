use crate::config::Config;
use crate::core::bank::format_bank;
use crate::core::ledger::{Adjustment, AdjustmentOutcome};
use crate::core::restore_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{update_punch_time, upsert_day_summary};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// High-level business logic for the `adjust` command: apply an approved
/// retroactive correction and re-derive everything downstream of it.
pub struct AdjustLogic;

impl AdjustLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, adj: &Adjustment) -> AppResult<()> {
        let mut ledger = restore_ledger(pool, cfg)?;

        match ledger.apply_adjustment(adj)? {
            AdjustmentOutcome::Applied { punch_id, old_time } => {
                let rec = ledger.day(adj.date).ok_or_else(|| {
                    AppError::Ledger(format!("no day record for {} after adjustment", adj.date))
                })?;

                let detail = format!(
                    "{} moved {} -> {} (punch {})",
                    adj.target.pk_as_str(),
                    old_time.format("%H:%M"),
                    adj.new_time.format("%H:%M"),
                    punch_id
                );

                let tx = pool.conn.transaction()?;
                update_punch_time(&tx, punch_id, adj.new_time)?;
                upsert_day_summary(&tx, rec)?;
                ttlog(&tx, "adjust", &adj.date.to_string(), &detail)?;
                tx.commit()?;

                success(format!("Adjustment applied on {}: {}", adj.date, detail));
                match rec.total_minutes {
                    Some(total) => info(format!(
                        "Recomputed total for {}: {} min",
                        adj.date, total
                    )),
                    None => info(format!("Day {} has no defined total yet", adj.date)),
                }
                info(format!(
                    "Bank of hours: {}",
                    format_bank(ledger.bank().balance_minutes)
                ));
            }

            // No matching day or punch: best-effort no-op, but auditable.
            outcome @ (AdjustmentOutcome::DayNotFound | AdjustmentOutcome::PunchNotFound) => {
                let detail = match outcome {
                    AdjustmentOutcome::DayNotFound => {
                        format!("no punches on {}; adjustment skipped", adj.date)
                    }
                    _ => format!(
                        "no {} punch on {}; adjustment skipped",
                        adj.target.pk_as_str(),
                        adj.date
                    ),
                };
                ttlog(&pool.conn, "adjust", &adj.date.to_string(), &detail)?;
                warning(format!("Nothing to adjust: {}", detail));
            }
        }

        Ok(())
    }
}
