use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> TempDir {
    TempDir::new().unwrap()
}

fn mevn_in(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mevn").unwrap();
    cmd.current_dir(workspace.path()).env("NO_COLOR", "1");
    cmd
}

#[rstest]
fn it_refuses_more_than_one_name(workspace: TempDir) {
    mevn_in(&workspace)
        .args(["init", "my", "app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E001]"));

    workspace.child("my").assert(predicate::path::missing());
}

#[rstest]
#[case::uppercase("MyApp")]
#[case::leading_dot(".hidden")]
#[case::core_module("fs")]
fn it_refuses_invalid_names(workspace: TempDir, #[case] name: &str) {
    mevn_in(&workspace)
        .args(["init", name, "--template", "basic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E002]"));

    workspace.child(name).assert(predicate::path::missing());
}

#[rstest]
fn it_refuses_an_existing_directory(workspace: TempDir) {
    workspace.child("taken").create_dir_all().unwrap();

    mevn_in(&workspace)
        .args(["init", "taken", "--template", "basic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E003]"));

    workspace
        .child("taken/mevn.json")
        .assert(predicate::path::missing());
}

#[rstest]
fn it_needs_git(workspace: TempDir) {
    mevn_in(&workspace)
        .args(["init", "my-app", "--template", "basic"])
        .env("MEVN_GIT_PATH", "/definitely/not/git")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E004]"));

    workspace.child("my-app").assert(predicate::path::missing());
}
