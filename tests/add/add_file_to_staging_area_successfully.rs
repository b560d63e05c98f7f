use crate::common::command::{repository_dir, run_ugit_command};
use crate::common::file::{read_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_file_to_staging_area_successfully(repository_dir: TempDir) {
    run_ugit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 3);
    let names = files
        .iter()
        .map(|file| {
            file.path
                .file_name()
                .expect("generated file has a name")
                .to_string_lossy()
                .to_string()
        })
        .collect::<Vec<_>>();

    for name in &names {
        run_ugit_command(repository_dir.path(), &["add", name])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Added '{}'", name)));
    }

    let ugit = repository_dir.path().join(".ugit");
    let expected_index = names
        .iter()
        .map(|name| format!("{}\n", name))
        .collect::<String>();
    assert_eq!(read_file(&ugit.join("index")), expected_index);

    for (name, file) in names.iter().zip(&files) {
        assert_eq!(read_file(&ugit.join("stage").join(name)), file.content);
    }
}
