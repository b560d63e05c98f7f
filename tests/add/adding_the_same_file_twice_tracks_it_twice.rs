use crate::common::command::{repository_dir, run_ugit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_the_same_file_twice_tracks_it_twice(repository_dir: TempDir) {
    run_ugit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file_path = repository_dir.path().join("foo.txt");

    write_file(FileSpec::new(file_path.clone(), "hello".to_string()));
    run_ugit_command(repository_dir.path(), &["add", "foo.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(file_path, "world".to_string()));
    run_ugit_command(repository_dir.path(), &["add", "foo.txt"])
        .assert()
        .success();

    let ugit = repository_dir.path().join(".ugit");
    assert_eq!(read_file(&ugit.join("index")), "foo.txt\nfoo.txt\n");
    assert_eq!(read_file(&ugit.join("stage").join("foo.txt")), "world");
}
