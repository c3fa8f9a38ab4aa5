extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandel() -> Command {
    let mut cmd = Command::cargo_bin("mandel").unwrap();
    cmd.args(&["--size", "32x24", "--threads", "1"]);
    cmd
}

#[test]
fn draws_once_and_quits() {
    mandel()
        .with_stdin()
        .buffer("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scale with + and -. Move with arrows."))
        .stdout(predicate::str::contains(
            "Redrawing in scale 2:1 (iterations: 100)...",
        ))
        .stdout(predicate::str::contains("done in"));
}

#[test]
fn zooming_changes_scale_and_budget() {
    mandel()
        .with_stdin()
        .buffer("+\n+\n-\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Redrawing in scale 1:1 (iterations: 150)...",
        ))
        .stdout(predicate::str::contains(
            "Redrawing in scale 1:2 (iterations: 200)...",
        ));
}

#[test]
fn zoom_out_below_half_is_ignored() {
    mandel()
        .with_stdin()
        .buffer("-\n-\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Redrawing in scale 4:1 (iterations: 50)...",
        ))
        .stdout(predicate::str::contains("iterations: 0").not());
}

#[test]
fn unknown_actions_are_reported_and_skipped() {
    mandel()
        .with_stdin()
        .buffer("sideways\nup\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized action 'sideways'"));
}

#[test]
fn degenerate_size_is_fatal() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "1x480"])
        .with_stdin()
        .buffer("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dimension 1x480"));
}

#[test]
fn non_positive_scale_is_fatal() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--scale", "0"])
        .with_stdin()
        .buffer("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scale"));
}
