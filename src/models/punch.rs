use super::{location::Location, punch_kind::PunchKind};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i64,                    // ⇔ punches.id (0 until inserted)
    pub date: NaiveDate,            // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,            // ⇔ punches.time (TEXT "HH:MM")
    pub kind: PunchKind,            // ⇔ punches.kind ('in'|'out'|'break_start'|'break_end')
    pub location: Option<Location>, // ⇔ punches.location ('O','R','C' or NULL)
    pub source: String,             // ⇔ punches.source (TEXT, default 'cli')
    pub created_at: String,         // ⇔ punches.created_at (TEXT, ISO8601)
}

impl Punch {
    /// High-level constructor for punches created by the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(date: NaiveDate, time: NaiveTime, kind: PunchKind, location: Option<Location>) -> Self {
        Self {
            id: 0,
            date,
            time,
            kind,
            location,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Absolute instant of the punch, derived from its calendar date and
    /// display time.
    pub fn timestamp(&self) -> DateTime<Local> {
        let dt = self.date.and_time(self.time);
        // convert naive to Local (multi-timezone handling is out of scope)
        dt.and_local_timezone(Local).unwrap()
    }
}
