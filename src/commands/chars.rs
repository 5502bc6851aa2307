use crate::areas::session::Session;
use crate::artifacts::diff::engine::compute_inline_char_diff;
use crate::artifacts::diff::model::CharSegment;
use colored::Colorize;

impl Session {
    /// Prints the character diff of two single lines.
    pub fn chars(&self, old_line: &str, new_line: &str, json: bool) -> anyhow::Result<()> {
        let segments = compute_inline_char_diff(old_line, new_line);

        if json {
            writeln!(self.writer(), "{}", serde_json::to_string(&segments)?)?;
            return Ok(());
        }

        let rendered = segments
            .iter()
            .map(|segment| match segment {
                CharSegment::Equal { value } => value.to_string(),
                CharSegment::Removed { value } => format!("[-{value}-]").red().to_string(),
                CharSegment::Added { value } => format!("{{+{value}+}}").green().to_string(),
            })
            .collect::<String>();
        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }
}
