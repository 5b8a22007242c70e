//! Bank-of-hours aggregation: the signed cumulative surplus or deficit of
//! worked minutes versus the expected-minutes-per-day policy.

use crate::models::day_record::DayRecord;
use crate::utils::formatting::mins2readable;

/// Per-call summary of the aggregation inputs, for reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankSummary {
    pub balance_minutes: i64,
    pub counted_days: usize,
    pub worked_minutes: i64,
}

/// Reduce all day records into the running balance.
///
/// Always a full re-scan over every record with a defined total; the
/// balance is never stored or updated incrementally. The ledger covers a
/// single employee's history, so the scan stays cheap.
pub fn bank_balance<'a, I>(days: I, expected_per_day: i64) -> BankSummary
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut worked = 0i64;
    let mut counted = 0usize;

    for rec in days {
        if let Some(total) = rec.total_minutes {
            worked += total;
            counted += 1;
        }
    }

    BankSummary {
        balance_minutes: worked - expected_per_day * counted as i64,
        counted_days: counted,
        worked_minutes: worked,
    }
}

/// Format a balance with an explicit leading sign; zero prints as "+00:00".
pub fn format_bank(minutes: i64) -> String {
    if minutes == 0 {
        return "+00:00".to_string();
    }
    mins2readable(minutes, true, true)
}
