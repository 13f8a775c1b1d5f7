use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn it_explains_a_known_code() {
    let mut cmd = Command::cargo_bin("mevn").unwrap();
    cmd.args(["explain", "E003"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("E003"));
}

#[test]
fn it_rejects_an_unknown_code() {
    let mut cmd = Command::cargo_bin("mevn").unwrap();
    cmd.args(["explain", "E404"]).assert().failure();
}
