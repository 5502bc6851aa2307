use crate::areas::session::Session;
use crate::artifacts::core::format::format_bytes;
use crate::artifacts::input::file_type::language_from_extension;
use std::path::Path;

impl Session {
    pub async fn stat(&self, original: &Path, modified: &Path) -> anyhow::Result<()> {
        let result = self.compare_files(original, modified).await?;

        let (original_size, modified_size, language) = {
            let state = self.state();
            (
                state.original_text.len(),
                state.modified_text.len(),
                language_from_extension(&state.file_extension),
            )
        };

        writeln!(self.writer(), "language: {language}")?;
        writeln!(
            self.writer(),
            "original: {} lines ({})",
            result.original_line_count,
            format_bytes(original_size)
        )?;
        writeln!(
            self.writer(),
            "modified: {} lines ({})",
            result.modified_line_count,
            format_bytes(modified_size)
        )?;
        writeln!(self.writer(), "{}", result.stats)?;

        Ok(())
    }
}
