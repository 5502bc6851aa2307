use crate::common::command::{run_knowdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_missing_file(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "present\n".to_string(),
    ));

    run_knowdiff_command(workspace_dir.path(), &["diff", "old.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing.txt"));
}
