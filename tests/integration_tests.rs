use predicates::str::contains;

mod common;
use common::{add_booking, init_db_with_data, init_test_db, sbk, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    sbk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_booking() {
    let db_path = setup_test_db("add_list");
    init_test_db(&db_path);

    sbk()
        .args([
            "--db",
            &db_path,
            "add",
            "2030-07-04",
            "--time",
            "14:00",
            "--duration",
            "2h",
            "--space",
            "principal-zone",
            "--client",
            "Ada",
        ])
        .assert()
        .success()
        .stdout(contains("Booked"));

    sbk()
        .args(["--db", &db_path, "list", "--period", "2030-07-04"])
        .assert()
        .success()
        .stdout(contains("ID"))
        // header rule drawn with the configured separator char
        .stdout(contains("-----"))
        .stdout(contains("2030-07-04"))
        .stdout(contains("14:00"))
        .stdout(contains("pending"))
        .stdout(contains("Ada"));
}

#[test]
fn test_overlapping_add_is_not_persisted() {
    let db_path = setup_test_db("overlap_add");
    init_test_db(&db_path);

    add_booking(&db_path, "2030-07-04", "14:00", "2h", "principal-zone");

    // 15:00 falls inside the 14:00-16:00 window
    sbk()
        .args([
            "--db",
            &db_path,
            "add",
            "2030-07-04",
            "--time",
            "15:00",
            "--duration",
            "1h",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("Not booked"))
        .stdout(contains("already occupied"))
        .stdout(contains("15:00"));

    // back-to-back booking right after the window is fine
    sbk()
        .args([
            "--db",
            &db_path,
            "add",
            "2030-07-04",
            "--time",
            "16:00",
            "--duration",
            "1h",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("Booked"));
}

#[test]
fn test_check_json_reports_conflicts() {
    let db_path = setup_test_db("check_json");
    init_db_with_data(&db_path);

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "15:00",
            "--duration",
            "1h",
            "--space",
            "principal-zone",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"available\": false"))
        .stdout(contains("already occupied"))
        .stdout(contains("\"15:00\""));

    // same slot, different space: no conflict
    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "15:00",
            "--duration",
            "1h",
            "--space",
            "cyclorama",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"available\": true"));
}

#[test]
fn test_check_past_date() {
    let db_path = setup_test_db("check_past");
    init_test_db(&db_path);

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2020-01-01",
            "--time",
            "10:00",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("date has passed"));
}

#[test]
fn test_check_closing_boundary() {
    let db_path = setup_test_db("check_closing");
    init_test_db(&db_path);

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "21:00",
            "--duration",
            "2h",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("23:00"))
        .stdout(contains("22:00"));

    // ending exactly at closing is allowed
    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "20:00",
            "--duration",
            "2h",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("available"));
}

#[test]
fn test_check_invalid_duration() {
    let db_path = setup_test_db("check_duration");
    init_test_db(&db_path);

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "10:00",
            "--duration",
            "0h",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("invalid duration"));
}

#[test]
fn test_day_partition_follows_status_changes() {
    let db_path = setup_test_db("day_status");
    init_test_db(&db_path);

    add_booking(&db_path, "2030-07-04", "10:00", "2h", "principal-zone");

    sbk()
        .args([
            "--db",
            &db_path,
            "day",
            "2030-07-04",
            "--space",
            "principal-zone",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"pending\""))
        .stdout(contains("\"10:00\""));

    // confirm booking #1, the slots move from pending to occupied
    sbk()
        .args(["--db", &db_path, "status", "1", "confirmed"])
        .assert()
        .success()
        .stdout(contains("is now confirmed"));

    sbk()
        .args([
            "--db",
            &db_path,
            "day",
            "2030-07-04",
            "--space",
            "principal-zone",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"occupied\": [\n    \"10:00\",\n    \"11:00\"\n  ]"));
}

#[test]
fn test_cancelling_frees_the_slot() {
    let db_path = setup_test_db("cancel_frees");
    init_test_db(&db_path);

    add_booking(&db_path, "2030-07-04", "14:00", "2h", "principal-zone");

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "14:00",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("already occupied"));

    sbk()
        .args(["--db", &db_path, "status", "1", "cancelled"])
        .assert()
        .success();

    sbk()
        .args([
            "--db",
            &db_path,
            "check",
            "2030-07-04",
            "--time",
            "14:00",
            "--space",
            "principal-zone",
        ])
        .assert()
        .success()
        .stdout(contains("available"));
}

#[test]
fn test_del_booking_by_id() {
    let db_path = setup_test_db("del_id");
    init_test_db(&db_path);

    add_booking(&db_path, "2030-07-04", "14:00", "1h", "principal-zone");

    sbk()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    sbk()
        .args(["--db", &db_path, "list", "--period", "2030-07-04"])
        .assert()
        .success()
        .stdout(contains("No bookings"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    sbk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[add]"))
        .stdout(contains("[init]"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maint");
    init_db_with_data(&db_path);

    sbk()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity OK"));

    sbk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migrations completed"));

    sbk()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total bookings"));
}
