use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn it_lists_every_template() {
    let mut cmd = Command::cargo_bin("mevn").unwrap();
    let result = cmd.arg("templates").assert().success();

    result
        .stdout(predicate::str::contains("Nuxt-js"))
        .stdout(predicate::str::contains(
            "https://github.com/madlabsinc/mevn-boilerplate.git",
        ))
        .stdout(predicate::str::contains(
            "https://github.com/madlabsinc/mevn-graphql-boilerplate.git",
        ));
}
