use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// `punches` is the append-only event store, `days` the derived per-date
/// summary rewritten after every mutation, `log` the internal audit trail.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('in','out','break_start','break_end')),
            location   TEXT CHECK(location IN ('O','R','C')),
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date ON punches(date);

        CREATE TABLE IF NOT EXISTS days (
            date          TEXT PRIMARY KEY,
            total_minutes INTEGER,
            updated_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
