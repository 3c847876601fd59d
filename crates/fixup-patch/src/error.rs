//! Error types for the patch layer
//!
//! - Ingress failures (file → artifact)
//! - Egress failures (artifact → file)
//! - Strict-mode refusal when anchors are missing

use fixup_artifact::ArtifactError;
use std::path::PathBuf;

/// Errors while reading a target file (ingress)
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8
    #[error("{path} is not valid UTF-8")]
    NotUtf8 {
        /// File involved
        path: PathBuf,
    },

    /// File exceeds the configured size limit
    #[error("{path} is too large: {size} bytes (max: {max})")]
    TooLarge {
        /// File involved
        path: PathBuf,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        max: usize,
    },
}

impl IngressError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while writing a target file back (egress)
#[derive(Debug, thiserror::Error)]
pub enum EgressError {
    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl EgressError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined patch error
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// Reading the target failed
    #[error("ingress error: {0}")]
    Ingress(#[from] IngressError),

    /// Writing the target failed
    #[error("egress error: {0}")]
    Egress(#[from] EgressError),

    /// Content broke an artifact invariant
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Strict mode: at least one step found no anchor
    #[error("recipe '{recipe}' left {} step(s) unapplied: {}", .labels.len(), .labels.join(", "))]
    AnchorsMissing {
        /// Recipe name
        recipe: String,
        /// Labels of the steps whose anchor was missing
        labels: Vec<String>,
    },
}

/// Result type alias for patch operations
pub type PatchResult<T> = Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_display() {
        let err = IngressError::TooLarge {
            path: PathBuf::from("a.tsx"),
            size: 11,
            max: 10,
        };
        assert_eq!(err.to_string(), "a.tsx is too large: 11 bytes (max: 10)");
    }

    #[test]
    fn anchors_missing_lists_labels() {
        let err = PatchError::AnchorsMissing {
            recipe: "bet_buttons".to_string(),
            labels: vec!["card-sync".to_string(), "action-sync".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "recipe 'bet_buttons' left 2 step(s) unapplied: card-sync, action-sync"
        );
    }

    #[test]
    fn io_error_converts_into_patch_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PatchError = IngressError::io_error("x.tsx", io).into();
        assert!(err.to_string().starts_with("ingress error: io error reading x.tsx"));
    }
}
