use crate::artifacts::input::SUPPORTED_FILE_EXTENSIONS;
use phf::phf_map;

static LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    ".js" => "javascript",
    ".jsx" => "javascript",
    ".ts" => "typescript",
    ".tsx" => "typescript",
    ".py" => "python",
    ".json" => "json",
    ".css" => "css",
    ".html" => "html",
    ".xml" => "xml",
    ".md" => "markdown",
    ".sh" => "bash",
    ".bash" => "bash",
    ".sql" => "sql",
    ".yaml" => "yaml",
    ".yml" => "yaml",
    ".env" => "bash",
};

/// Lowercased extension including the dot (`App.TSX` -> `.tsx`), or `""`.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rfind('.')
        .map(|dot| file_name[dot..].to_lowercase())
        .unwrap_or_default()
}

pub fn is_supported_file_type(file_name: &str) -> bool {
    SUPPORTED_FILE_EXTENSIONS.contains(&file_extension(file_name).as_str())
}

/// Syntax-highlighting language for an extension; `plaintext` when unknown.
pub fn language_from_extension(extension: &str) -> &'static str {
    LANGUAGES.get(extension).copied().unwrap_or("plaintext")
}
