use crate::common::command::{run_knowdiff_command, stdout_of, workspace_dir};
use crate::common::file::{generated_text, write_pair};
use assert_fs::TempDir;
use knowdiff::{DiffOptions, DiffResult, compute_diff};
use rstest::rstest;

#[rstest]
fn print_json_that_reads_back_into_the_model(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = generated_text(12);
    let modified = original
        .lines()
        .enumerate()
        .filter(|(i, _)| i % 3 != 0)
        .map(|(_, line)| format!("{line}\n"))
        .chain(std::iter::once("  trailing addition  \n".to_string()))
        .collect::<String>();
    write_pair(workspace_dir.path(), &original, &modified);

    let stdout = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["json", "-w", "old.txt", "new.txt"],
    ))?;
    let actual: DiffResult = serde_json::from_str(&stdout)?;

    let expected = compute_diff(&original, &modified, DiffOptions::new(true));
    pretty_assertions::assert_eq!(actual, expected);

    Ok(())
}
