use crate::common::command::{run_knowdiff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case("cat", "bat", "[-c-]{+b+}at\n")]
#[case("abc", "xyz", "[-abc-]{+xyz+}\n")]
#[case("same", "same", "same\n")]
fn show_char_diff_of_two_lines(
    workspace_dir: TempDir,
    #[case] old_line: &str,
    #[case] new_line: &str,
    #[case] expected_output: &str,
) {
    run_knowdiff_command(
        workspace_dir.path(),
        &["--color", "never", "chars", old_line, new_line],
    )
    .assert()
    .success()
    .stdout(predicate::eq(expected_output));
}

#[rstest]
fn show_char_diff_as_json(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_knowdiff_command(workspace_dir.path(), &["chars", "--json", "cat", "bat"])
        .assert()
        .success();
    let actual: Value = serde_json::from_slice(&output.get_output().stdout)?;

    let expected = json!([
        { "type": "removed", "value": "c" },
        { "type": "added", "value": "b" },
        { "type": "equal", "value": "at" }
    ]);
    pretty_assertions::assert_eq!(actual, expected);

    Ok(())
}
