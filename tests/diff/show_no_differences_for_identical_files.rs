use crate::common::command::{run_knowdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_no_differences_for_identical_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(workspace_dir.path(), "same\ntext\n", "same\ntext\n");

    let actual_output = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["diff", "old.txt", "new.txt"],
    ))?;

    let expected_output = r#"--- a/old.txt
+++ b/new.txt
No differences found, both inputs are identical.
2 lines: +0 -0 =2
"#;
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
