use crate::common::command::{repository_dir, run_ugit_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_a_missing_file_fails(repository_dir: TempDir) {
    run_ugit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let missing_file_name = format!("{}.txt", Word().fake::<String>());

    run_ugit_command(repository_dir.path(), &["add", &missing_file_name])
        .assert()
        .code(255)
        .stderr(predicate::str::contains(format!(
            "file '{}' does not exist",
            missing_file_name
        )));

    let ugit = repository_dir.path().join(".ugit");
    assert!(
        read_file(&ugit.join("index")).is_empty(),
        "Index should be empty after adding a missing file"
    );
    assert_eq!(std::fs::read_dir(ugit.join("stage")).unwrap().count(), 0);
}
