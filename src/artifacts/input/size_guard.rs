use crate::artifacts::core::error::DiffError;
use crate::artifacts::input::MAX_COMBINED_INPUT_BYTES;
use derive_new::new;
use tracing::warn;

/// Rejects input pairs whose combined UTF-8 size exceeds `limit` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct InputGuard {
    limit: usize,
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::new(MAX_COMBINED_INPUT_BYTES)
    }
}

impl InputGuard {
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the combined size when it is within the limit.
    pub fn check(&self, original: &str, modified: &str) -> Result<usize, DiffError> {
        let size = combined_size(original, modified);
        if size > self.limit {
            warn!(size, limit = self.limit, "rejecting oversized input");
            return Err(DiffError::InputTooLarge {
                size,
                limit: self.limit,
            });
        }

        Ok(size)
    }
}

pub fn combined_size(original: &str, modified: &str) -> usize {
    original.len() + modified.len()
}

/// Whether a diff of `size` bytes should leave the calling thread.
pub fn should_offload(size: usize, threshold: usize) -> bool {
    size > threshold
}
