//! The in-memory punch ledger: an explicit service object owning every
//! day record, the guard checks, and the recomputation chain. The CLI and
//! SQLite layers restore one of these per invocation, apply a single
//! operation, and persist the delta.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate, NaiveTime};

use crate::core::bank::{self, BankSummary};
use crate::core::guards::{self, GuardCheck};
use crate::core::intervals::reconstruct;
use crate::core::totals::daily_total;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::location::Location;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;

/// An approved retroactive correction for one clock punch.
///
/// `punch_id` pins the correction to a specific punch identity. It may be
/// omitted only when the day holds exactly one punch of the target kind;
/// with several candidates and no id the adjustment is rejected as
/// ambiguous instead of silently rewriting the first match.
#[derive(Debug, Clone)]
pub struct Adjustment {
    pub date: NaiveDate,
    pub target: PunchKind,
    pub new_time: NaiveTime,
    pub punch_id: Option<i64>,
}

/// What an adjustment did. Not-found cases are no-ops toward the caller
/// but must still reach the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentOutcome {
    Applied { punch_id: i64, old_time: NaiveTime },
    DayNotFound,
    PunchNotFound,
}

pub struct PunchLedger {
    days: BTreeMap<NaiveDate, DayRecord>,
    holidays: BTreeSet<NaiveDate>,
    expected_per_day: i64,
    // In-flight flag: serializes punch submissions so two overlapping
    // actions cannot both pass their guard against the same state.
    busy: bool,
}

impl PunchLedger {
    pub fn new(expected_per_day: i64, holidays: BTreeSet<NaiveDate>) -> Self {
        Self {
            days: BTreeMap::new(),
            holidays,
            expected_per_day,
            busy: false,
        }
    }

    /// Rebuild the ledger from persisted punches (already ordered by time
    /// within each date) and recompute every day's derived state.
    pub fn restore(&mut self, punches: Vec<Punch>) -> AppResult<()> {
        for punch in punches {
            let date = punch.date;
            self.days
                .entry(date)
                .or_insert_with(|| DayRecord::new(date))
                .punches
                .push(punch);
        }
        let dates: Vec<NaiveDate> = self.days.keys().copied().collect();
        for date in dates {
            self.recompute_day(date)?;
        }
        Ok(())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    /// All day records, ordered by date.
    pub fn day_records(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.values()
    }

    pub fn expected_per_day(&self) -> i64 {
        self.expected_per_day
    }

    // ------------------------------------------------
    // Guard previews (read-only, safe to poll)
    // ------------------------------------------------

    pub fn can_clock_in(&self, date: NaiveDate) -> GuardCheck {
        guards::can_clock_in(self.day(date), self.is_holiday(date))
    }

    pub fn can_clock_out(&self, date: NaiveDate) -> GuardCheck {
        guards::can_clock_out(self.day(date), self.is_holiday(date))
    }

    pub fn can_start_break(&self, date: NaiveDate) -> GuardCheck {
        guards::can_start_break(self.day(date), self.is_holiday(date))
    }

    pub fn can_end_break(&self, date: NaiveDate) -> GuardCheck {
        guards::can_end_break(self.day(date), self.is_holiday(date))
    }

    // ------------------------------------------------
    // Punch submissions
    // ------------------------------------------------

    pub fn clock_in(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        self.submit(date, time, PunchKind::ClockIn, location)
    }

    pub fn clock_out(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        self.submit(date, time, PunchKind::ClockOut, location)
    }

    pub fn start_break(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        self.submit(date, time, PunchKind::BreakStart, location)
    }

    pub fn end_break(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        self.submit(date, time, PunchKind::BreakEnd, location)
    }

    /// Route one punch submission through its guard and append it.
    /// Returns the punches actually appended: clocking out over an open
    /// break auto-closes the break first, so that case appends two.
    pub fn submit(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        kind: PunchKind,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        if self.busy {
            return Err(AppError::Busy);
        }
        self.busy = true;
        let result = self.submit_inner(date, time, kind, location);
        self.busy = false;
        result
    }

    fn submit_inner(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        kind: PunchKind,
        location: Option<Location>,
    ) -> AppResult<Vec<Punch>> {
        let check = match kind {
            PunchKind::ClockIn => self.can_clock_in(date),
            PunchKind::ClockOut => self.can_clock_out(date),
            PunchKind::BreakStart => self.can_start_break(date),
            PunchKind::BreakEnd => self.can_end_break(date),
        };
        if !check.ok {
            let reason = check.reason.unwrap_or_else(|| "rejected".to_string());
            return Err(AppError::GuardRejected(format!(
                "{} rejected: {}",
                kind.pk_as_str(),
                reason
            )));
        }

        // Punches stay chronological by construction: a submission whose
        // time predates the day's last punch would reorder on reload and
        // reconstruct different intervals than the session that accepted it.
        if let Some(rec) = self.day(date)
            && let Some(last) = rec.punches.last()
            && time < last.time
        {
            return Err(AppError::GuardRejected(format!(
                "{} rejected: punch at {} predates the last recorded punch at {}",
                kind.pk_as_str(),
                time.format("%H:%M"),
                last.time.format("%H:%M")
            )));
        }

        let mut appended = Vec::new();

        // Clock-out over an open break closes the break at the clock-out
        // instant before the clock-out punch lands. Convenience rule, not
        // an error path.
        if kind == PunchKind::ClockOut
            && let Some(rec) = self.day(date)
            && rec.has_open_break()
        {
            appended.push(Punch::new(date, time, PunchKind::BreakEnd, location));
        }

        appended.push(Punch::new(date, time, kind, location));

        let rec = self
            .days
            .entry(date)
            .or_insert_with(|| DayRecord::new(date));
        rec.punches.extend(appended.iter().cloned());

        self.recompute_day(date)?;
        Ok(appended)
    }

    // ------------------------------------------------
    // Retroactive adjustments
    // ------------------------------------------------

    /// Apply an approved correction: rewrite one clock punch's time and
    /// rerun the full recomputation chain. Bypasses the guards; a missing
    /// day or punch is reported as a no-op outcome, never an error.
    pub fn apply_adjustment(&mut self, adj: &Adjustment) -> AppResult<AdjustmentOutcome> {
        if !adj.target.is_adjustable() {
            return Err(AppError::InvalidKind(format!(
                "only clock-in/clock-out punches can be adjusted, not {}",
                adj.target.pk_as_str()
            )));
        }

        let Some(rec) = self.days.get_mut(&adj.date) else {
            return Ok(AdjustmentOutcome::DayNotFound);
        };

        let candidates: Vec<usize> = rec
            .punches
            .iter()
            .enumerate()
            .filter(|(_, p)| p.kind == adj.target)
            .map(|(i, _)| i)
            .collect();

        let index = match (adj.punch_id, candidates.as_slice()) {
            (_, []) => return Ok(AdjustmentOutcome::PunchNotFound),
            (Some(id), _) => {
                match candidates
                    .iter()
                    .copied()
                    .find(|&i| rec.punches[i].id == id)
                {
                    Some(i) => i,
                    None => return Ok(AdjustmentOutcome::PunchNotFound),
                }
            }
            (None, [only]) => *only,
            (None, many) => {
                return Err(AppError::AmbiguousAdjustment(format!(
                    "{} {} punches exist on {}; pass --punch <id> to pick one",
                    many.len(),
                    adj.target.pk_as_str(),
                    adj.date
                )));
            }
        };

        let punch = &mut rec.punches[index];
        let old_time = punch.time;
        let punch_id = punch.id;
        punch.time = adj.new_time;

        self.recompute_day(adj.date)?;
        Ok(AdjustmentOutcome::Applied { punch_id, old_time })
    }

    // ------------------------------------------------
    // Recomputation chain & aggregation
    // ------------------------------------------------

    /// Rerun interval reconstruction and the daily total for one day.
    /// Called after every mutation; the bank is never cached, so nothing
    /// else needs patching.
    fn recompute_day(&mut self, date: NaiveDate) -> AppResult<()> {
        let rec = self
            .days
            .get_mut(&date)
            .ok_or_else(|| AppError::Ledger(format!("no day record for {date}")))?;

        rec.intervals = reconstruct(&rec.punches);

        // Guards keep this impossible; seeing it means the stored punches
        // are corrupt, which is fatal rather than repairable.
        if rec.open_break_count() > 1 {
            return Err(AppError::Ledger(format!(
                "{} open breaks reconstructed for {}",
                rec.open_break_count(),
                date
            )));
        }

        rec.total_minutes = daily_total(&rec.punches, &rec.intervals);
        rec.updated_at = Local::now();
        Ok(())
    }

    /// Full re-scan over every day with a defined total.
    pub fn bank(&self) -> BankSummary {
        bank::bank_balance(self.days.values(), self.expected_per_day)
    }
}
