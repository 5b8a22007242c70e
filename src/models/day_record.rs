use super::{interval::Interval, punch::Punch, punch_kind::PunchKind};
use chrono::{DateTime, Local, NaiveDate};

/// One calendar day of the ledger: the ordered punch list plus the state
/// derived from it. Punches are insertion-ordered, which the guards keep
/// chronological; intervals and total are rebuilt from scratch after every
/// mutation.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub punches: Vec<Punch>,
    pub intervals: Vec<Interval>,
    pub total_minutes: Option<i64>,
    pub updated_at: DateTime<Local>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            punches: Vec::new(),
            intervals: Vec::new(),
            total_minutes: None,
            updated_at: Local::now(),
        }
    }

    pub fn count_of(&self, kind: PunchKind) -> usize {
        self.punches.iter().filter(|p| p.kind == kind).count()
    }

    pub fn has_clock_in(&self) -> bool {
        self.count_of(PunchKind::ClockIn) > 0
    }

    pub fn has_clock_out(&self) -> bool {
        self.count_of(PunchKind::ClockOut) > 0
    }

    /// A break is open when the derived interval list holds an interval
    /// without an end instant.
    pub fn has_open_break(&self) -> bool {
        self.intervals.iter().any(|iv| iv.is_open())
    }

    pub fn open_break_count(&self) -> usize {
        self.intervals.iter().filter(|iv| iv.is_open()).count()
    }
}
