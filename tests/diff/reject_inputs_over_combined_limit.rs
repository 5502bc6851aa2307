use crate::common::command::{run_knowdiff_command, workspace_dir};
use crate::common::file::{generated_text, write_pair};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_inputs_over_combined_limit(workspace_dir: TempDir) {
    let text = generated_text(50);
    write_pair(workspace_dir.path(), &text, &text);

    run_knowdiff_command(
        workspace_dir.path(),
        &["diff", "--max-input-bytes", "64", "old.txt", "new.txt"],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Inputs are too large ("))
    .stderr(predicate::str::contains(
        "Maximum combined size is 0.00 MiB.",
    ));
}

#[rstest]
fn reject_single_file_over_file_limit(workspace_dir: TempDir) {
    write_pair(workspace_dir.path(), &"x".repeat(100), "small\n");

    run_knowdiff_command(
        workspace_dir.path(),
        &["stat", "--max-file-bytes", "50", "old.txt", "new.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("old.txt is too large"));
}
