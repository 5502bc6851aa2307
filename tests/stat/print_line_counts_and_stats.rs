use crate::common::command::{changed_line_dir, run_knowdiff_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_line_counts_and_stats(changed_line_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_knowdiff_command(
        changed_line_dir.path(),
        &["stat", "old.txt", "new.txt"],
    ))?;

    let expected_output = r#"language: plaintext
original: 2 lines (12 B)
modified: 2 lines (12 B)
3 lines: +1 -1 =1
"#;
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn print_language_hint_of_modified_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("old.py"), "x = 1\n".to_string()));
    write_file(FileSpec::new(dir.join("new.py"), "x = 2\n".to_string()));

    let actual_output = stdout_of(&mut run_knowdiff_command(dir, &["stat", "old.py", "new.py"]))?;

    assert!(actual_output.starts_with("language: python\n"));

    Ok(())
}

#[rstest]
fn print_stats_for_large_unrelated_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = (0..15_000).map(|i| format!("old line {i}\n")).collect::<String>();
    let modified = (0..15_000).map(|i| format!("new line {i}\n")).collect::<String>();
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), original));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), modified));

    let actual_output = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["stat", "old.txt", "new.txt"],
    ))?;

    assert!(actual_output.ends_with("30000 lines: +15000 -15000 =0\n"));

    Ok(())
}
