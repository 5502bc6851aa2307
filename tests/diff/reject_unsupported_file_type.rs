use crate::common::command::{run_knowdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_unsupported_file_type(workspace_dir: TempDir) {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("a.rs"), "fn a() {}\n".to_string()));
    write_file(FileSpec::new(dir.join("b.rs"), "fn b() {}\n".to_string()));

    run_knowdiff_command(dir, &["diff", "a.rs", "b.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type '.rs'"));

    run_knowdiff_command(dir, &["diff", "--any-extension", "a.rs", "b.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lines: +1 -1 =0"));
}
