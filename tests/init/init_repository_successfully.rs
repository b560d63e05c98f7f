use crate::common::command::{repository_dir, run_ugit_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_ugit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty ugit repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let ugit = repository_dir.path().join(".ugit");
    assert!(ugit.join("stage").is_dir());
    assert!(ugit.join("commits").is_dir());
    assert_eq!(read_file(&ugit.join("HEAD")), "master");
    assert_eq!(read_file(&ugit.join("index")), "");
    assert_eq!(read_file(&ugit.join("log")), "");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&ugit)?.permissions().mode();
        assert_eq!(mode & 0o077, 0, "marker directory must be private");
    }

    Ok(())
}
