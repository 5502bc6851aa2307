use crate::artifacts::core::error::{DiffError, Side};
use crate::artifacts::diff::engine::decode;
use crate::artifacts::input::file_type::{file_extension, is_supported_file_type};
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A decoded text file ready for comparison.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    /// Lowercased extension with the dot, used only as a syntax hint.
    pub extension: String,
}

/// Reads comparison inputs relative to a root directory.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    max_file_bytes: usize,
    any_extension: bool,
}

impl Workspace {
    pub fn new(path: Box<Path>, max_file_bytes: usize, any_extension: bool) -> Self {
        Workspace {
            path,
            max_file_bytes,
            any_extension,
        }
    }

    pub fn read_source(&self, file: &Path, side: Side) -> Result<SourceFile, DiffError> {
        let path = self.path.join(file);
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !self.any_extension && !is_supported_file_type(&name) {
            return Err(DiffError::UnsupportedFileType {
                path: file.to_path_buf(),
                extension: file_extension(&name),
            });
        }

        let io_error = |source| DiffError::Io {
            path: file.to_path_buf(),
            source,
        };

        // sized from metadata so oversized files are never loaded
        let size = std::fs::metadata(&path).map_err(io_error)?.len();
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        if size > self.max_file_bytes {
            return Err(DiffError::FileTooLarge {
                path: file.to_path_buf(),
                size,
                limit: self.max_file_bytes,
            });
        }

        let bytes = std::fs::read(&path).map_err(io_error)?;

        let text = decode(&bytes, side)?.to_string();
        debug!(file = %file.display(), bytes = bytes.len(), %side, "read source file");

        Ok(SourceFile::new(
            file.to_path_buf(),
            text,
            file_extension(&name),
        ))
    }
}
