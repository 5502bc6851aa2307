use crate::common::command::{run_knowdiff_command, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn honor_size_limits_from_environment(workspace_dir: TempDir) {
    write_pair(workspace_dir.path(), "0123456789\n", "abcdefghij\n");

    run_knowdiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .env("KNOWDIFF_MAX_INPUT_BYTES", "8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inputs are too large"));
}
