//! Editor configuration, loaded from RON.
//!
//! ```ron
//! (
//!     history_limit: 200,
//!     coalesce_window_ms: 750,
//! )
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use std::path::Path;

use pagecraft_types::MAX_NESTING_DEPTH;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of undo entries kept per session.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Default window within which same-field edits share one undo entry.
pub const DEFAULT_COALESCE_WINDOW_MS: u64 = 1000;

/// Tunables for one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum undo entries; the oldest are dropped first. 0 disables history.
    pub history_limit: usize,

    /// Successive updates to the same fields of the same block closer together
    /// than this collapse into one undo entry.
    pub coalesce_window_ms: u64,

    /// Deepest allowed block tree, counting the top level as 1.
    pub max_nesting_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl EditorConfig {
    /// Parse and validate RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&text)?;
        tracing::debug!("loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::OutOfRange {
                field: "max_nesting_depth",
                reason: "must be at least 1 (top-level blocks are depth 1)".to_string(),
            });
        }
        Ok(())
    }

    /// Set the undo history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the coalescing window in milliseconds.
    pub fn with_coalesce_window_ms(mut self, ms: u64) -> Self {
        self.coalesce_window_ms = ms;
        self
    }

    /// Set the maximum block-tree depth. Values below 1 are raised to 1.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth.max(1);
        self
    }

    /// Raise out-of-range fields to their minimum, logging each correction.
    pub(crate) fn clamped(mut self) -> Self {
        if let Err(e) = self.validate() {
            tracing::warn!("editor config: {e}, using max_nesting_depth 1");
            self.max_nesting_depth = 1;
        }
        self
    }
}
