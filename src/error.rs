//! Error handling for the occlusion octree
//!
//! Every failure in this crate is a local invariant violation: a bad handle,
//! a malformed grid or a broken config. None of them are transient, so there
//! is no retry machinery here, only loud errors.

use thiserror::Error;

/// Main error type for the occlusion subsystem
#[derive(Debug, Error)]
pub enum OcclusionError {
    #[error("Voxel handle out of range: handle {handle} >= store length {len}")]
    OutOfRange { handle: usize, len: usize },

    /// A handle whose center fell into no octant while descending an internal
    /// node. Inserts recover from this by storing on the internal node; the
    /// variant exists so callers can report it.
    #[error("Voxel handle {handle} matched no child octant")]
    DegenerateInsert { handle: usize },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid voxel grid: {0}")]
    InvalidGrid(String),

    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("GPU operation '{operation}' failed: {error}")]
    Gpu { operation: String, error: String },
}

/// Type alias for Results in the occlusion subsystem
pub type OcclusionResult<T> = Result<T, OcclusionError>;

impl From<std::io::Error> for OcclusionError {
    fn from(error: std::io::Error) -> Self {
        OcclusionError::Io {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for OcclusionError {
    fn from(error: toml::de::Error) -> Self {
        OcclusionError::ConfigParse(error.to_string())
    }
}

/// Extension trait for attaching a path to foreign errors
pub trait ErrorContext<T> {
    fn io_context(self, path: &str) -> OcclusionResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn io_context(self, path: &str) -> OcclusionResult<T> {
        self.map_err(|e| OcclusionError::Io {
            path: path.to_string(),
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OcclusionError::OutOfRange { handle: 10, len: 5 };
        assert_eq!(
            err.to_string(),
            "Voxel handle out of range: handle 10 >= store length 5"
        );
    }

    #[test]
    fn test_io_context_keeps_path() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        match result.io_context("occlusion.toml") {
            Err(OcclusionError::Io { path, error }) => {
                assert_eq!(path, "occlusion.toml");
                assert!(error.contains("file not found"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
