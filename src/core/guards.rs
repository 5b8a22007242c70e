//! Business-rule guards for punch submissions. Each check is read-only and
//! safe to poll before acting: it never mutates the ledger, and a denial
//! carries the short reason shown to the user.

use crate::models::day_record::DayRecord;

/// Outcome of a guard preview: `ok == false` always carries a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardCheck {
    pub ok: bool,
    pub reason: Option<String>,
}

impl GuardCheck {
    pub fn allow() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub fn deny(reason: &str) -> Self {
        Self {
            ok: false,
            reason: Some(reason.to_string()),
        }
    }
}

const HOLIDAY: &str = "punches are not accepted on a holiday";
const ALREADY_IN: &str = "already clocked in today";
const NOT_IN: &str = "not clocked in yet";
const ALREADY_OUT: &str = "already clocked out today";
const BREAK_OPEN: &str = "a break is already open";
const NO_BREAK_OPEN: &str = "no break is open";

pub fn can_clock_in(rec: Option<&DayRecord>, holiday: bool) -> GuardCheck {
    if holiday {
        return GuardCheck::deny(HOLIDAY);
    }
    match rec {
        Some(r) if r.has_clock_in() => GuardCheck::deny(ALREADY_IN),
        _ => GuardCheck::allow(),
    }
}

pub fn can_clock_out(rec: Option<&DayRecord>, holiday: bool) -> GuardCheck {
    if holiday {
        return GuardCheck::deny(HOLIDAY);
    }
    match rec {
        None => GuardCheck::deny(NOT_IN),
        Some(r) if !r.has_clock_in() => GuardCheck::deny(NOT_IN),
        Some(r) if r.has_clock_out() => GuardCheck::deny(ALREADY_OUT),
        _ => GuardCheck::allow(),
    }
}

pub fn can_start_break(rec: Option<&DayRecord>, holiday: bool) -> GuardCheck {
    if holiday {
        return GuardCheck::deny(HOLIDAY);
    }
    match rec {
        None => GuardCheck::deny(NOT_IN),
        Some(r) if !r.has_clock_in() => GuardCheck::deny(NOT_IN),
        Some(r) if r.has_clock_out() => GuardCheck::deny(ALREADY_OUT),
        Some(r) if r.has_open_break() => GuardCheck::deny(BREAK_OPEN),
        _ => GuardCheck::allow(),
    }
}

pub fn can_end_break(rec: Option<&DayRecord>, holiday: bool) -> GuardCheck {
    if holiday {
        return GuardCheck::deny(HOLIDAY);
    }
    match rec {
        Some(r) if r.has_open_break() => GuardCheck::allow(),
        _ => GuardCheck::deny(NO_BREAK_OPEN),
    }
}
