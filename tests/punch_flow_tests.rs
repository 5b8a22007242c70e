use predicates::str::contains;

mod common;
use common::{full_day, init_db, pb, punch, setup_test_db};

#[test]
fn test_full_day_with_break() {
    let db_path = setup_test_db("full_day_with_break");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-01", "09:00");
    punch(&db_path, "break-start", "2025-09-01", "12:00");
    punch(&db_path, "break-end", "2025-09-01", "13:00");
    punch(&db_path, "out", "2025-09-01", "18:00");

    pb().args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("break 12:00 - 13:00 (60 min)"))
        .stdout(contains("Worked: 480 min"))
        .stdout(contains("Bank of hours: +00:00"));
}

#[test]
fn test_plain_day_total() {
    let db_path = setup_test_db("plain_day_total");
    init_db(&db_path);

    full_day(&db_path, "2025-09-02", "09:00", "17:00");

    pb().args(["--db", &db_path, "list", "--period", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Worked: 480 min"));

    pb().args(["--db", &db_path, "bank"])
        .assert()
        .success()
        .stdout(contains("Bank of hours: +00:00"))
        .stdout(contains("1 closed day"));
}

#[test]
fn test_clock_in_twice_rejected() {
    let db_path = setup_test_db("clock_in_twice");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-03", "09:00");

    pb().args(["--db", &db_path, "in", "--date", "2025-09-03", "--at", "09:30"])
        .assert()
        .failure()
        .stderr(contains("clock-in rejected: already clocked in today"));
}

#[test]
fn test_clock_out_without_clock_in_rejected() {
    let db_path = setup_test_db("out_without_in");
    init_db(&db_path);

    pb().args(["--db", &db_path, "out", "--date", "2025-09-04", "--at", "17:00"])
        .assert()
        .failure()
        .stderr(contains("clock-out rejected: not clocked in yet"));
}

#[test]
fn test_break_end_without_open_break_rejected() {
    let db_path = setup_test_db("break_end_no_open");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-05", "09:00");

    pb().args([
        "--db",
        &db_path,
        "break-end",
        "--date",
        "2025-09-05",
        "--at",
        "13:00",
    ])
    .assert()
    .failure()
    .stderr(contains("break-end rejected: no break is open"));
}

#[test]
fn test_second_break_while_open_rejected() {
    let db_path = setup_test_db("double_break");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-06", "09:00");
    punch(&db_path, "break-start", "2025-09-06", "12:00");

    pb().args([
        "--db",
        &db_path,
        "break-start",
        "--date",
        "2025-09-06",
        "--at",
        "12:30",
    ])
    .assert()
    .failure()
    .stderr(contains("break-start rejected: a break is already open"));
}

#[test]
fn test_clock_out_auto_closes_open_break() {
    let db_path = setup_test_db("auto_close_break");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-07", "09:00");
    punch(&db_path, "break-start", "2025-09-07", "12:00");

    pb().args(["--db", &db_path, "out", "--date", "2025-09-07", "--at", "17:00"])
        .assert()
        .success()
        .stdout(contains("Open break auto-closed at the clock-out time."));

    // 8h span minus the 5h auto-closed break
    pb().args(["--db", &db_path, "list", "--period", "2025-09-07"])
        .assert()
        .success()
        .stdout(contains("break 12:00 - 17:00 (300 min)"))
        .stdout(contains("Worked: 180 min"));
}

#[test]
fn test_day_is_terminal_after_clock_out() {
    let db_path = setup_test_db("terminal_day");
    init_db(&db_path);

    full_day(&db_path, "2025-09-08", "09:00", "17:00");

    pb().args([
        "--db",
        &db_path,
        "break-start",
        "--date",
        "2025-09-08",
        "--at",
        "17:30",
    ])
    .assert()
    .failure()
    .stderr(contains("already clocked out today"));

    pb().args(["--db", &db_path, "out", "--date", "2025-09-08", "--at", "18:00"])
        .assert()
        .failure()
        .stderr(contains("clock-out rejected: already clocked out today"));
}

#[test]
fn test_open_day_excluded_from_bank() {
    let db_path = setup_test_db("open_day_bank");
    init_db(&db_path);

    full_day(&db_path, "2025-09-09", "09:00", "18:00");
    punch(&db_path, "in", "2025-09-10", "09:00");
    punch(&db_path, "break-start", "2025-09-10", "12:00");

    // only the closed day counts: 540 worked vs 480 expected
    pb().args(["--db", &db_path, "bank"])
        .assert()
        .success()
        .stdout(contains("Bank of hours: +01:00"))
        .stdout(contains("1 closed day"));

    pb().args(["--db", &db_path, "list", "--period", "2025-09-10"])
        .assert()
        .success()
        .stdout(contains("break 12:00 - (open)"))
        .stdout(contains("Worked: (day not closed, excluded from the bank)"));
}

#[test]
fn test_backdated_punch_rejected_and_day_stays_consistent() {
    let db_path = setup_test_db("backdated_punch");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-20", "09:00");
    punch(&db_path, "break-start", "2025-09-20", "12:00");

    // a break-end before the break-start must not land in the ledger
    pb().args([
        "--db",
        &db_path,
        "break-end",
        "--date",
        "2025-09-20",
        "--at",
        "11:30",
    ])
    .assert()
    .failure()
    .stderr(contains(
        "break-end rejected: punch at 11:30 predates the last recorded punch at 12:00",
    ));

    // the day reloads exactly as accepted: break still open, then closed
    // by a chronological punch
    punch(&db_path, "break-end", "2025-09-20", "12:30");
    punch(&db_path, "out", "2025-09-20", "17:00");

    pb().args(["--db", &db_path, "list", "--period", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("Punches: 4"))
        .stdout(contains("break 12:00 - 12:30 (30 min)"))
        .stdout(contains("Worked: 450 min"));
}

#[test]
fn test_invalid_time_rejected() {
    let db_path = setup_test_db("invalid_time");
    init_db(&db_path);

    pb().args(["--db", &db_path, "in", "--date", "2025-09-11", "--at", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9am"));
}

#[test]
fn test_invalid_location_rejected() {
    let db_path = setup_test_db("invalid_location");
    init_db(&db_path);

    pb().args([
        "--db",
        &db_path,
        "in",
        "--date",
        "2025-09-12",
        "--at",
        "09:00",
        "--pos",
        "X",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid location code"));
}

#[test]
fn test_status_previews_follow_the_day_state() {
    let db_path = setup_test_db("status_preview");
    init_db(&db_path);

    pb().args(["--db", &db_path, "status", "--date", "2025-09-13"])
        .assert()
        .success()
        .stdout(contains("blocked (not clocked in yet)"));

    punch(&db_path, "in", "2025-09-13", "09:00");

    pb().args(["--db", &db_path, "status", "--date", "2025-09-13"])
        .assert()
        .success()
        .stdout(contains("blocked (already clocked in today)"))
        .stdout(contains("09:00 clock-in"));
}

#[test]
fn test_punches_are_audited() {
    let db_path = setup_test_db("audited_punches");
    init_db(&db_path);

    punch(&db_path, "in", "2025-09-14", "09:00");

    pb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("punch (2025-09-14)"))
        .stdout(contains("clock-in at 09:00"));
}
