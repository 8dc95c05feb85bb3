//! Typed errors for the engine's edges.
//!
//! The analytics core never fails: missing or malformed values degrade to
//! documented defaults. Errors exist only at the boundaries, where files
//! are read, parsed, and written. Binary entry points wrap these in
//! `anyhow::Result` for context chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SavannahError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("invalid value for {field}: {message}")]
    Validation { field: String, message: String },
}

impl SavannahError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn snapshot(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Snapshot {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = SavannahError::snapshot("/tmp/feed.json", "missing entities");
        assert_eq!(
            err.to_string(),
            "invalid snapshot /tmp/feed.json: missing entities"
        );

        let err = SavannahError::validation("severity", "must be numeric");
        assert_eq!(err.to_string(), "invalid value for severity: must be numeric");
    }

    #[test]
    fn io_errors_preserve_their_source() {
        use std::error::Error;
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SavannahError::io("/tmp/missing", inner);
        assert!(err.source().is_some());
    }
}
