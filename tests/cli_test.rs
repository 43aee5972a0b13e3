use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_authorize_capture_flow() {
    let file = common::events_file(&[
        "authorize, o-1, true, 200, Authorized, , S01-1, P01-1, , , 25.00",
        "capture, o-1, true, 200, Captured, , S01-1, , , , 25.00",
    ]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "order,status,charge_id,charge_permission_id,refund_id,result,errors",
        ))
        .stdout(predicate::str::contains("o-1,paid,S01-1,P01-1,,Captured,"));
}

#[test]
fn test_authorize_and_capture_mode() {
    let file = common::events_file(&["authorize, o-1, true, 200, Captured, , S01-1, P01-1"]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path()).arg("--mode").arg("authorize_and_capture");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("o-1,paid,S01-1,P01-1,,Captured,"));
}

#[test]
fn test_declines_keep_order_pending() {
    let file = common::events_file(&[
        "authorize, o-1, false, 400, Declined, AmazonRejected",
        "authorize, o-2, false, 400, Declined, HardDeclined",
        "authorize, o-3, false, 400, Declined, ProcessingFailure",
    ]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "o-1,pending,,,,Declined AmazonRejected,{}",
            common::SOFT_DECLINE_TEXT
        )))
        .stdout(predicate::str::contains(format!(
            "o-2,pending,,,,Declined HardDeclined,{}",
            common::HARD_DECLINE_TEXT
        )))
        .stdout(predicate::str::contains(
            "o-3,pending,,,,Declined ProcessingFailure,Payment authorization failed: Declined ProcessingFailure",
        ));
}

#[test]
fn test_pending_authorization_then_settle() {
    let file = common::events_file(&[
        "authorize, o-1, true, 202, AuthorizationInitiated, , S01-1, P01-1",
        "settle, o-1, true, 200, Authorized, , S01-1, P01-1",
    ]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("o-1,authorized,S01-1,P01-1,,Authorized,"));
}

#[test]
fn test_pending_authorization_without_settle() {
    let file = common::events_file(&["authorize, o-1, true, 202, AuthorizationInitiated, , S01-1"]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("o-1,pending,S01-1,,,AuthorizationInitiated,"));
}

#[test]
fn test_unknown_provider_is_rejected() {
    let file = common::events_file(&["authorize, o-1, true, 200, Authorized"]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path()).arg("--provider").arg("paypal");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown payment provider: paypal"));
}

#[test]
fn test_provider_name_is_case_insensitive() {
    let file = common::events_file(&["authorize, o-1, true, 200, Authorized, , S01-1"]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path()).arg("--provider").arg("Amazon_Pay");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("o-1,authorized,S01-1"));
}

#[test]
fn test_invalid_mode_is_rejected() {
    let file = common::events_file(&["authorize, o-1, true, 200, Authorized"]);

    let mut cmd = Command::new(cargo_bin!("paymapper"));
    cmd.arg(file.path()).arg("--mode").arg("eventually");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown transaction mode"));
}
