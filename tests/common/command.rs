use crate::common::file::write_pair;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `old.txt` and `new.txt` differing in their second line.
#[fixture]
pub fn changed_line_dir(workspace_dir: TempDir) -> TempDir {
    write_pair(workspace_dir.path(), "hello\nworld\n", "hello\nearth\n");
    workspace_dir
}

#[fixture]
pub fn changed_line_output() -> String {
    r#"--- a/old.txt
+++ b/new.txt
   1    1  hello
   2      -world
        2 +earth
3 lines: +1 -1 =1
"#
    .to_string()
}

pub fn run_knowdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("knowdiff").expect("Failed to find knowdiff binary");
    cmd.env_remove("KNOWDIFF_LOG");
    cmd.env_remove("KNOWDIFF_MAX_INPUT_BYTES");
    cmd.env_remove("KNOWDIFF_MAX_FILE_BYTES");
    cmd.env_remove("KNOWDIFF_OFFLOAD_THRESHOLD");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
