#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: authorize only
    let csv1 = common::events_file(&["authorize, o-1, true, 200, Authorized, , S01-1, P01-1"]);

    let output1 = Command::new(cargo_bin!("paymapper"))
        .arg(csv1.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("o-1,authorized,S01-1,P01-1,,Authorized,"));

    // 2. Second run: capture against the recovered authorization
    let csv2 = common::events_file(&["capture, o-1, true, 200, Captured"]);

    let output2 = Command::new(cargo_bin!("paymapper"))
        .arg(csv2.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    // Charge and permission ids survive from the first run
    assert!(stdout2.contains("o-1,paid,S01-1,P01-1,,Captured,"));
}

#[test]
fn test_rocksdb_keeps_refund_id() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let csv1 = common::events_file(&[
        "authorize, o-1, true, 200, Captured, , S01-1, P01-1",
        "refund, o-1, true, 201, RefundInitiated, , R01-1, , true",
    ]);
    let status = Command::new(cargo_bin!("paymapper"))
        .arg(csv1.path())
        .arg("--mode")
        .arg("authorize_and_capture")
        .arg("--db-path")
        .arg(&db_path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    // A void on a refunded order is skipped; the stored refund id stays.
    let csv2 = common::events_file(&["void, o-1, true, 200, Canceled"]);
    let output = Command::new(cargo_bin!("paymapper"))
        .arg(csv2.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("o-1,partially_refunded,S01-1,P01-1,R01-1,RefundInitiated,"));
}
