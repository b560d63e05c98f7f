use crate::common::command::{committed_repository_dir, run_ugit_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_twice_fails(committed_repository_dir: TempDir) {
    let ugit = committed_repository_dir.path().join(".ugit");
    let head_before = read_file(&ugit.join("HEAD"));
    let log_before = read_file(&ugit.join("log"));

    run_ugit_command(committed_repository_dir.path(), &["init"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read_file(&ugit.join("HEAD")), head_before);
    assert_eq!(read_file(&ugit.join("log")), log_before);
}
