use chrono::{DateTime, Local};
use serde::Serialize;

/// A break period reconstructed from a day's punches. Open while the
/// break-end punch has not arrived yet; duration is defined only once closed.
#[derive(Debug, Clone, Serialize)]
pub struct Interval {
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
    pub minutes: Option<i64>,
}

impl Interval {
    pub fn open(start: DateTime<Local>) -> Self {
        Self {
            start,
            end: None,
            minutes: None,
        }
    }

    pub fn closed(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        let minutes = (end - start).num_minutes().max(0);
        Self {
            start,
            end: Some(end),
            minutes: Some(minutes),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
