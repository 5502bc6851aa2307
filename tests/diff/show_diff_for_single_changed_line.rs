use crate::common::command::{
    changed_line_dir, changed_line_output, run_knowdiff_command, stdout_of,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_for_single_changed_line(
    changed_line_dir: TempDir,
    changed_line_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_knowdiff_command(
        changed_line_dir.path(),
        &["diff", "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, changed_line_output);

    Ok(())
}

#[rstest]
fn show_same_listing_without_inline_highlighting(
    changed_line_dir: TempDir,
    changed_line_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_knowdiff_command(
        changed_line_dir.path(),
        &["diff", "--no-inline", "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, changed_line_output);

    Ok(())
}
