use crate::common::command::{committed_repository_dir, run_ugit_command, ugit_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::DEFAULT_COMMIT_ID;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_restores_previous_content(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let second_id = "1672574401";

    write_file(FileSpec::new(dir.join("foo.txt"), "world".to_string()));
    run_ugit_command(dir, &["add", "foo.txt"]).assert().success();
    ugit_commit(dir, "second", "2023-01-01 12:00:01 +0000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("[{}]", second_id)));
    assert_eq!(read_file(&dir.join("foo.txt")), "world");

    run_ugit_command(dir, &["checkout", DEFAULT_COMMIT_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Restored 1 file(s) from commit {}",
            DEFAULT_COMMIT_ID
        )))
        .stdout(predicate::str::contains("first"));

    assert_eq!(read_file(&dir.join("foo.txt")), "hello");

    // checkout moves neither HEAD nor the index, and the stage keeps its copy
    let ugit = dir.join(".ugit");
    assert_eq!(read_file(&ugit.join("HEAD")), second_id);
    assert_eq!(read_file(&ugit.join("index")), "foo.txt\nfoo.txt\n");
    assert_eq!(read_file(&ugit.join("stage").join("foo.txt")), "world");

    run_ugit_command(dir, &["checkout", second_id])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("foo.txt")), "world");
}
