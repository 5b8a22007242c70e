//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an unparseable time explicitly instead of letting it slide through
/// as a bogus instant.
pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a work-duration policy string like "8h", "7h30", or "450" (minutes).
pub fn parse_work_duration_to_minutes(s: &str) -> AppResult<i64> {
    let trimmed = s.trim();

    if let Some(rest) = trimmed.strip_suffix('h') {
        let hours: i64 = rest
            .parse()
            .map_err(|_| AppError::Config(format!("invalid work duration: {s}")))?;
        return Ok(hours * 60);
    }

    if let Some((h, m)) = trimmed.split_once('h') {
        let hours: i64 = h
            .parse()
            .map_err(|_| AppError::Config(format!("invalid work duration: {s}")))?;
        let mins: i64 = m
            .parse()
            .map_err(|_| AppError::Config(format!("invalid work duration: {s}")))?;
        return Ok(hours * 60 + mins);
    }

    trimmed
        .parse()
        .map_err(|_| AppError::Config(format!("invalid work duration: {s}")))
}
