//! Input collaborators around the diff engine
//!
//! The engine itself never limits or inspects its inputs; the checks that
//! bound what reaches it live here:
//!
//! - `size_guard`: combined size limit and the off-path threshold
//! - `file_type`: extension validation and syntax-language hints

pub mod file_type;
pub mod size_guard;

/// Largest single file accepted for comparison (1 MiB).
pub const MAX_FILE_SIZE_BYTES: usize = 1_048_576;

/// Combined size above which a diff runs off the calling thread (10 KiB).
pub const LARGE_INPUT_THRESHOLD_BYTES: usize = 10_240;

/// Largest combined size of both inputs (2 MiB).
pub const MAX_COMBINED_INPUT_BYTES: usize = MAX_FILE_SIZE_BYTES * 2;

/// Unchanged lines kept visible around a change when a viewer collapses context.
pub const UNCHANGED_CONTEXT_LINES: usize = 3;

/// Extensions accepted as UTF-8 text files.
pub const SUPPORTED_FILE_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".log", ".conf", ".ini", ".csv", ".tsv", ".js", ".jsx", ".ts", ".tsx", ".json",
    ".py", ".css", ".html", ".xml", ".yaml", ".yml", ".sh", ".bash", ".sql", ".env",
];
