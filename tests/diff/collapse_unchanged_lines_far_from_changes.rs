use crate::common::command::{run_knowdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn collapse_unchanged_lines_far_from_changes(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = (1..=10).map(|i| format!("l{i}\n")).collect::<String>();
    let modified = original.replace("l5\n", "X\n");
    write_pair(workspace_dir.path(), &original, &modified);

    let actual_output = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["diff", "--collapse", "old.txt", "new.txt"],
    ))?;

    let expected_output = r#"--- a/old.txt
+++ b/new.txt
@@ 1 unchanged line @@
   2    2  l2
   3    3  l3
   4    4  l4
   5      -l5
        5 +X
   6    6  l6
   7    7  l7
   8    8  l8
@@ 2 unchanged lines @@
11 lines: +1 -1 =9
"#;
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
