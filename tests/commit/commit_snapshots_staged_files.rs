use crate::common::command::{repository_dir, run_ugit_command, ugit_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::{DEFAULT_COMMIT_ID, DEFAULT_COMMITTER_DATE};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_snapshots_staged_files(repository_dir: TempDir) {
    run_ugit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "alpha".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "beta".to_string(),
    ));
    run_ugit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_ugit_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    // the working copy changes after staging; the commit must hold the staged bytes
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "alpha, edited".to_string(),
    ));

    ugit_commit(repository_dir.path(), "first", DEFAULT_COMMITTER_DATE)
        .assert()
        .success()
        .stdout(predicate::eq(format!("[{}] first\n", DEFAULT_COMMIT_ID)));

    let ugit = repository_dir.path().join(".ugit");
    let snapshot = ugit.join("commits").join(DEFAULT_COMMIT_ID);
    assert_eq!(read_file(&snapshot.join("a.txt")), "alpha");
    assert_eq!(read_file(&snapshot.join("b.txt")), "beta");
    assert_eq!(std::fs::read_dir(&snapshot).unwrap().count(), 2);

    assert_eq!(read_file(&ugit.join("HEAD")), DEFAULT_COMMIT_ID);
    assert_eq!(
        read_file(&ugit.join("log")),
        format!(
            "Commit: {}\nFecha: Sun Jan  1 12:00:00 2023\nMensaje: first\n{}\n",
            DEFAULT_COMMIT_ID,
            "-".repeat(40)
        )
    );
}
