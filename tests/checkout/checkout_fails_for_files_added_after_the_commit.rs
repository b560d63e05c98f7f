use crate::common::command::{committed_repository_dir, run_ugit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::DEFAULT_COMMIT_ID;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_fails_for_files_added_after_the_commit(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("foo.txt"), "world".to_string()));
    write_file(FileSpec::new(dir.join("bar.txt"), "new file".to_string()));
    run_ugit_command(dir, &["add", "bar.txt"]).assert().success();

    run_ugit_command(dir, &["checkout", DEFAULT_COMMIT_ID])
        .assert()
        .code(255)
        .stderr(predicate::str::contains(format!(
            "commit {} has no snapshot of 'bar.txt'",
            DEFAULT_COMMIT_ID
        )));

    // foo.txt comes first in the index and was restored before the failure
    assert_eq!(read_file(&dir.join("foo.txt")), "hello");
    assert_eq!(read_file(&dir.join("bar.txt")), "new file");
}
