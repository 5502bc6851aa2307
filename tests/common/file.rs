use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_pair(dir: &Path, original: &str, modified: &str) {
    write_file(FileSpec::new(dir.join("old.txt"), original.to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), modified.to_string()));
}

pub fn generated_text(lines: usize) -> String {
    use fake::{Fake, faker::lorem::en::Words};

    (0..lines)
        .map(|_| format!("{}\n", Words(3..8).fake::<Vec<String>>().join(" ")))
        .collect()
}
