use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::{DiffError, Side};
use crate::artifacts::diff::engine::{DiffOptions, compute_diff, compute_diff_offloaded};
use crate::artifacts::diff::model::DiffResult;
use crate::artifacts::input::size_guard::{InputGuard, should_offload};
use crate::artifacts::input::{
    LARGE_INPUT_THRESHOLD_BYTES, MAX_COMBINED_INPUT_BYTES, MAX_FILE_SIZE_BYTES,
};
use anyhow::Context;
use derive_new::new;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_EXTENSION: &str = ".txt";

/// Settings for one comparison session, resolved from flags and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CompareConfig {
    pub ignore_whitespace: bool,
    pub max_input_bytes: usize,
    pub max_file_bytes: usize,
    pub offload_threshold: usize,
    pub any_extension: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            max_input_bytes: MAX_COMBINED_INPUT_BYTES,
            max_file_bytes: MAX_FILE_SIZE_BYTES,
            offload_threshold: LARGE_INPUT_THRESHOLD_BYTES,
            any_extension: false,
        }
    }
}

impl CompareConfig {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions::new(self.ignore_whitespace)
    }
}

/// Inputs and outcome of the most recent comparison.
///
/// A failed comparison clears `result` and records `error`; there are no
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareState {
    pub original_text: String,
    pub modified_text: String,
    pub file_extension: String,
    pub result: Option<DiffResult>,
    pub error: Option<String>,
}

impl Default for CompareState {
    fn default() -> Self {
        Self {
            original_text: String::new(),
            modified_text: String::new(),
            file_extension: DEFAULT_EXTENSION.to_string(),
            result: None,
            error: None,
        }
    }
}

impl CompareState {
    /// Updates both inputs without computing anything.
    pub fn set_texts(&mut self, original: String, modified: String) {
        self.original_text = original;
        self.modified_text = modified;
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fail(&mut self, error: &DiffError) {
        self.result = None;
        self.error = Some(error.to_string());
    }
}

pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    config: CompareConfig,
    state: RefCell<CompareState>,
}

impl Session {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        config: CompareConfig,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("failed to open workspace at {path}"))?;
        let workspace = Workspace::new(
            path.into_boxed_path(),
            config.max_file_bytes,
            config.any_extension,
        );

        Ok(Session {
            writer: RefCell::new(writer),
            workspace,
            config,
            state: RefCell::new(CompareState::default()),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn state(&self) -> Ref<'_, CompareState> {
        self.state.borrow()
    }

    pub fn reset(&self) {
        self.state.borrow_mut().reset();
    }

    /// Reads both files and compares their contents.
    pub async fn compare_files(
        &self,
        original: &Path,
        modified: &Path,
    ) -> Result<DiffResult, DiffError> {
        let sources = self
            .workspace
            .read_source(original, Side::Original)
            .and_then(|original| {
                let modified = self.workspace.read_source(modified, Side::Modified)?;
                Ok((original, modified))
            });

        let (original, modified) = match sources {
            Ok(sources) => sources,
            Err(error) => {
                self.state.borrow_mut().fail(&error);
                return Err(error);
            }
        };

        // the modified file's extension wins as the display hint
        let extension = if modified.extension.is_empty() {
            original.extension
        } else {
            modified.extension
        };

        self.compare_texts(original.text, modified.text, Some(extension))
            .await
    }

    /// Guards, then diffs two texts, recording the outcome in the session state.
    pub async fn compare_texts(
        &self,
        original: String,
        modified: String,
        extension: Option<String>,
    ) -> Result<DiffResult, DiffError> {
        {
            let mut state = self.state.borrow_mut();
            state.set_texts(original.clone(), modified.clone());
            if let Some(extension) = extension.filter(|ext| !ext.is_empty()) {
                state.file_extension = extension;
            }
        }

        let outcome = self.run_diff(original, modified).await;

        let mut state = self.state.borrow_mut();
        match outcome {
            Ok(result) => {
                info!(stats = %result.stats, "comparison finished");
                state.result = Some(result.clone());
                Ok(result)
            }
            Err(error) => {
                state.fail(&error);
                Err(error)
            }
        }
    }

    async fn run_diff(&self, original: String, modified: String) -> Result<DiffResult, DiffError> {
        let size = InputGuard::new(self.config.max_input_bytes).check(&original, &modified)?;
        let options = self.config.diff_options();

        if should_offload(size, self.config.offload_threshold) {
            debug!(size, threshold = self.config.offload_threshold, "large input");
            compute_diff_offloaded(original, modified, options).await
        } else {
            Ok(compute_diff(&original, &modified, options))
        }
    }
}
