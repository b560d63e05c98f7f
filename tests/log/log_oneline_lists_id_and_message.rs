use crate::common::command::{committed_repository_dir, run_ugit_command, stdout_of, ugit_commit};
use crate::common::file::{FileSpec, write_file};
use crate::common::DEFAULT_COMMIT_ID;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_oneline_lists_id_and_message(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("foo.txt"), "world".to_string()));
    run_ugit_command(dir, &["add", "foo.txt"]).assert().success();
    ugit_commit(dir, "second\n\nlonger explanation", "2023-01-01 12:01:00 +0000")
        .assert()
        .success();

    let stdout = stdout_of(&mut run_ugit_command(dir, &["log", "--oneline"]));

    assert_eq!(
        stdout,
        format!("{} first\n1672574460 second\n", DEFAULT_COMMIT_ID)
    );
}
