use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl PunchKind {
    /// Parse a CLI argument such as "in" or "break-start".
    pub fn pk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "clock-in" => Some(Self::ClockIn),
            "out" | "clock-out" => Some(Self::ClockOut),
            "break-start" => Some(Self::BreakStart),
            "break-end" => Some(Self::BreakEnd),
            _ => None,
        }
    }

    pub fn pk_as_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock-in",
            PunchKind::ClockOut => "clock-out",
            PunchKind::BreakStart => "break-start",
            PunchKind::BreakEnd => "break-end",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "in",
            PunchKind::ClockOut => "out",
            PunchKind::BreakStart => "break_start",
            PunchKind::BreakEnd => "break_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchKind::ClockIn),
            "out" => Some(PunchKind::ClockOut),
            "break_start" => Some(PunchKind::BreakStart),
            "break_end" => Some(PunchKind::BreakEnd),
            _ => None,
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, PunchKind::ClockIn)
    }

    pub fn is_clock_out(&self) -> bool {
        matches!(self, PunchKind::ClockOut)
    }

    /// Only clock punches may be targeted by a retroactive adjustment.
    pub fn is_adjustable(&self) -> bool {
        matches!(self, PunchKind::ClockIn | PunchKind::ClockOut)
    }
}
