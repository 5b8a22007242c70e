//! Daily worked-minutes calculation.

use crate::models::{interval::Interval, punch::Punch, punch_kind::PunchKind};

/// Reduce a day's punches and intervals to its worked minutes.
///
/// Defined only when the day has both a clock-in and a clock-out; a day
/// still in progress (or missing its clock-out) yields `None` and is
/// excluded from aggregation. Closed break intervals are subtracted from
/// the clocked span; the result is clamped to >= 0.
pub fn daily_total(punches: &[Punch], intervals: &[Interval]) -> Option<i64> {
    let clock_in = punches.iter().find(|p| p.kind == PunchKind::ClockIn)?;
    let clock_out = punches.iter().find(|p| p.kind == PunchKind::ClockOut)?;

    let span = (clock_out.timestamp() - clock_in.timestamp()).num_minutes();
    let breaks: i64 = intervals.iter().filter_map(|iv| iv.minutes).sum();

    Some((span - breaks).max(0))
}
