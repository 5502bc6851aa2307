use crate::common::command::{run_knowdiff_command, stdout_of, workspace_dir};
use crate::common::file::{generated_text, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn offload_large_inputs_without_changing_output(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = generated_text(40);
    let modified = format!("{original}one more line\n");
    write_pair(workspace_dir.path(), &original, &modified);

    let inline = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["json", "--offload-threshold", "1000000", "old.txt", "new.txt"],
    ))?;
    let offloaded = stdout_of(&mut run_knowdiff_command(
        workspace_dir.path(),
        &["json", "--offload-threshold", "0", "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(inline, offloaded);

    Ok(())
}
