//! Error types for shiftmap operations.
//!
//! The engine itself is pure arithmetic and cannot fail; errors arise only
//! at the edges — loading scenario files, validating static catalogs, and
//! validating caller-supplied inputs before a run. Application-level code
//! (CLI, loaders) works in `anyhow::Result` and converts via `?`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShiftmapError {
    /// Static configuration (matrix, role catalog) failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Caller-supplied scenario inputs failed validation.
    #[error("invalid scenario input: {0}")]
    Input(String),

    /// A scenario file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scenario file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ShiftmapError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// True when the user can fix the problem by editing inputs or the
    /// scenario file, as opposed to a bug in a built-in catalog.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Parse { .. })
    }
}
