use crate::common::command::{committed_repository_dir, run_ugit_command, ugit_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::{DEFAULT_COMMIT_ID, DEFAULT_COMMITTER_DATE};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commits_in_the_same_second_collide(committed_repository_dir: TempDir) {
    let ugit = committed_repository_dir.path().join(".ugit");
    let log_before = read_file(&ugit.join("log"));

    write_file(FileSpec::new(
        committed_repository_dir.path().join("foo.txt"),
        "world".to_string(),
    ));
    run_ugit_command(committed_repository_dir.path(), &["add", "foo.txt"])
        .assert()
        .success();

    ugit_commit(committed_repository_dir.path(), "second", DEFAULT_COMMITTER_DATE)
        .assert()
        .code(255)
        .stderr(predicate::str::contains(format!(
            "commit {} already exists",
            DEFAULT_COMMIT_ID
        )));

    // the first commit is untouched and nothing else recorded the failed one
    let snapshot = ugit.join("commits").join(DEFAULT_COMMIT_ID);
    assert_eq!(read_file(&snapshot.join("foo.txt")), "hello");
    assert_eq!(read_file(&ugit.join("log")), log_before);
    assert_eq!(read_file(&ugit.join("HEAD")), DEFAULT_COMMIT_ID);
}
