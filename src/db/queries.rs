use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::location::Location;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Load every stored punch, ordered by date then time so the restored
/// ledger sees each day chronologically.
pub fn load_all_punches(conn: &Connection) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, kind, location, source, created_at
         FROM punches
         ORDER BY date ASC, time ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Punch> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    let loc_str: Option<String> = row.get("location")?;
    let location = match loc_str {
        Some(code) => Some(Location::from_db_str(&code).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidLocation(code.clone())),
            )
        })?),
        None => None,
    };

    Ok(Punch {
        id: row.get("id")?,
        date,
        time,
        kind,
        location,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_punch(conn: &Connection, punch: &Punch) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (date, time, kind, location, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            punch.date_str(),
            punch.time_str(),
            punch.kind.to_db_str(),
            punch.location.map(|l| l.to_db_str().to_string()),
            punch.source,
            punch.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewrite one punch's display time in place (retroactive adjustment).
pub fn update_punch_time(conn: &Connection, punch_id: i64, new_time: NaiveTime) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE punches SET time = ?1 WHERE id = ?2",
        params![new_time.format("%H:%M").to_string(), punch_id],
    )?;
    if changed != 1 {
        return Err(AppError::Other(format!(
            "expected to update punch {punch_id}, changed {changed} rows"
        )));
    }
    Ok(())
}

/// Rewrite the derived per-day summary row from a recomputed record.
pub fn upsert_day_summary(conn: &Connection, rec: &DayRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO days (date, total_minutes, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET
             total_minutes = excluded.total_minutes,
             updated_at = excluded.updated_at",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.total_minutes,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Distinct dates that hold at least one punch, ascending.
pub fn load_recorded_dates(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT DISTINCT date FROM punches ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let s = r?;
        let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.clone()))?;
        out.push(d);
    }
    Ok(out)
}
