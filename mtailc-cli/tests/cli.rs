//! Integration tests driving the built `mtailc` binary over fixture programs.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".mtail").tempfile().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn check_succeeds_on_a_clean_program() {
    let file = fixture("counter foo\n/x/ { foo++ }\n");

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn check_fails_and_prints_a_diagnostic_for_an_undeclared_identifier() {
    let file = fixture("foo++\n");

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not declared"));
}

#[test]
fn check_fails_and_prints_a_diagnostic_for_an_undefined_decorator() {
    let file = fixture("@nope { }\n");

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not defined"));
}

#[test]
fn check_with_no_files_and_no_matches_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("check")
        .current_dir(&dir)
        .assert()
        .failure();
}

#[test]
fn dump_prints_ast_nodes() {
    let file = fixture("counter foo\n");

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("dump")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Decl"));
}

#[test]
fn dump_tokens_prints_token_kinds() {
    let file = fixture("counter foo\n");

    Command::cargo_bin("mtailc")
        .unwrap()
        .arg("dump")
        .arg(file.path())
        .arg("--tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("Counter"));
}
