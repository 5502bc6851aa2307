use crate::areas::session::Session;
use std::path::Path;

impl Session {
    pub async fn json(&self, original: &Path, modified: &Path, pretty: bool) -> anyhow::Result<()> {
        let result = self.compare_files(original, modified).await?;

        let rendered = if pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }
}
