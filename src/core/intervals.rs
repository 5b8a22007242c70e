//! Break-interval reconstruction. Rebuilt from the full punch list on every
//! ledger mutation instead of patched incrementally: punches per day stay in
//! the single digits, and a from-scratch scan cannot drift out of sync with
//! the punch list.

use crate::models::{interval::Interval, punch::Punch, punch_kind::PunchKind};
use chrono::{DateTime, Local};

/// Scan a day's punches in order and derive its break intervals.
///
/// Break-start instants are pushed on a stack of unmatched starts; each
/// break-end pops the most recent start and emits a closed interval with a
/// duration clamped to >= 0. Whatever remains on the stack after the scan
/// becomes open intervals. The guards keep at most one start unmatched.
pub fn reconstruct(punches: &[Punch]) -> Vec<Interval> {
    let mut intervals = Vec::new();
    let mut open_starts: Vec<DateTime<Local>> = Vec::new();

    for punch in punches {
        match punch.kind {
            PunchKind::BreakStart => open_starts.push(punch.timestamp()),
            PunchKind::BreakEnd => {
                if let Some(start) = open_starts.pop() {
                    intervals.push(Interval::closed(start, punch.timestamp()));
                }
            }
            PunchKind::ClockIn | PunchKind::ClockOut => {}
        }
    }

    for start in open_starts {
        intervals.push(Interval::open(start));
    }

    intervals
}
