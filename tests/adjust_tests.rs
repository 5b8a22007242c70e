use predicates::str::contains;

mod common;
use common::{full_day, init_db, pb, punch, setup_test_db};

#[test]
fn test_adjust_clock_in_recomputes_total_and_bank() {
    let db_path = setup_test_db("adjust_recompute");
    init_db(&db_path);

    // 09:00-18:00 with a one-hour break: 480 worked, bank at zero
    punch(&db_path, "in", "2025-10-01", "09:00");
    punch(&db_path, "break-start", "2025-10-01", "12:00");
    punch(&db_path, "break-end", "2025-10-01", "13:00");
    punch(&db_path, "out", "2025-10-01", "18:00");

    pb().args(["--db", &db_path, "bank"])
        .assert()
        .success()
        .stdout(contains("Bank of hours: +00:00"));

    // approved correction: the clock-in actually happened at 08:30
    pb().args(["--db", &db_path, "adjust", "2025-10-01", "in", "08:30"])
        .assert()
        .success()
        .stdout(contains("clock-in moved 09:00 -> 08:30"))
        .stdout(contains("Recomputed total for 2025-10-01: 510 min"))
        .stdout(contains("Bank of hours: +00:30"));

    // the rewrite is persisted, not just printed
    pb().args(["--db", &db_path, "bank"])
        .assert()
        .success()
        .stdout(contains("Bank of hours: +00:30"));
}

#[test]
fn test_adjust_clock_out_only_touches_target_punch() {
    let db_path = setup_test_db("adjust_out_only");
    init_db(&db_path);

    punch(&db_path, "in", "2025-10-02", "09:00");
    punch(&db_path, "break-start", "2025-10-02", "12:00");
    punch(&db_path, "break-end", "2025-10-02", "13:00");
    punch(&db_path, "out", "2025-10-02", "17:00");

    pb().args(["--db", &db_path, "adjust", "2025-10-02", "out", "18:00"])
        .assert()
        .success()
        .stdout(contains("clock-out moved 17:00 -> 18:00"));

    // break untouched, total follows the new clock-out
    pb().args(["--db", &db_path, "list", "--period", "2025-10-02"])
        .assert()
        .success()
        .stdout(contains("break 12:00 - 13:00 (60 min)"))
        .stdout(contains("Worked: 480 min"));
}

#[test]
fn test_adjust_missing_day_is_audited_noop() {
    let db_path = setup_test_db("adjust_noop_day");
    init_db(&db_path);

    pb().args(["--db", &db_path, "adjust", "2025-10-03", "in", "08:00"])
        .assert()
        .success()
        .stdout(contains("Nothing to adjust"));

    pb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("no punches on 2025-10-03; adjustment skipped"));
}

#[test]
fn test_adjust_missing_punch_is_audited_noop() {
    let db_path = setup_test_db("adjust_noop_punch");
    init_db(&db_path);

    punch(&db_path, "in", "2025-10-04", "09:00");

    // day exists but holds no clock-out yet
    pb().args(["--db", &db_path, "adjust", "2025-10-04", "out", "17:00"])
        .assert()
        .success()
        .stdout(contains("Nothing to adjust"));

    pb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("no clock-out punch on 2025-10-04; adjustment skipped"));
}

#[test]
fn test_adjust_rejects_malformed_time() {
    let db_path = setup_test_db("adjust_bad_time");
    init_db(&db_path);

    full_day(&db_path, "2025-10-05", "09:00", "17:00");

    pb().args(["--db", &db_path, "adjust", "2025-10-05", "in", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:99"));
}

#[test]
fn test_adjust_rejects_break_punches() {
    let db_path = setup_test_db("adjust_break_kind");
    init_db(&db_path);

    full_day(&db_path, "2025-10-06", "09:00", "17:00");

    pb().args(["--db", &db_path, "adjust", "2025-10-06", "break-start", "12:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch kind"));
}

#[test]
fn test_ambiguous_adjustment_requires_punch_id() {
    let db_path = setup_test_db("adjust_ambiguous");
    init_db(&db_path);

    full_day(&db_path, "2025-10-07", "09:00", "12:00");

    // The guards forbid a second clock-in, but adjustment-induced drift can
    // leave one behind; seed it directly to reproduce the ambiguous day.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO punches (date, time, kind, source, created_at)
         VALUES ('2025-10-07', '13:00', 'in', 'test', '')",
        [],
    )
    .expect("seed second clock-in");

    pb().args(["--db", &db_path, "adjust", "2025-10-07", "in", "08:30"])
        .assert()
        .failure()
        .stderr(contains("Ambiguous adjustment"))
        .stderr(contains("--punch"));

    // pinning the punch identity disambiguates
    let first_in_id: i64 = conn
        .query_row(
            "SELECT id FROM punches WHERE date = '2025-10-07' AND kind = 'in' ORDER BY time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .expect("first clock-in id");

    pb().args([
        "--db",
        &db_path,
        "adjust",
        "2025-10-07",
        "in",
        "08:30",
        "--punch",
        &first_in_id.to_string(),
    ])
    .assert()
    .success()
    .stdout(contains("clock-in moved 09:00 -> 08:30"));
}
