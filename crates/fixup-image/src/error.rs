//! Error types for the screenshot resizer

use std::path::PathBuf;

/// Errors raised while resizing
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    /// Spec is unusable; nothing was touched
    #[error("invalid resize spec: {0}")]
    InvalidSpec(String),

    /// Input file does not exist; nothing was touched
    #[error("input not found: {}", .path.display())]
    InputMissing {
        /// Expected input location
        path: PathBuf,
    },

    /// Input exists but could not be read
    #[error("io error reading {}: {source}", .path.display())]
    Read {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input is not a decodable image
    #[error("image decode error for {}: {source}", .path.display())]
    Decode {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: image::ImageError,
    },

    /// Encoding the backup or the output failed
    #[error("image encode error for {}: {source}", .path.display())]
    Encode {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: image::ImageError,
    },

    /// Writing the backup or the output failed
    #[error("io error writing {}: {source}", .path.display())]
    Write {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ResizeError {
    /// True when the filesystem was left exactly as found
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpec(_) | Self::InputMissing { .. } | Self::Read { .. } | Self::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_missing_display() {
        let err = ResizeError::InputMissing {
            path: PathBuf::from("public/screenshot.jpg"),
        };
        assert_eq!(err.to_string(), "input not found: public/screenshot.jpg");
        assert!(err.is_untouched());
    }

    #[test]
    fn write_errors_may_leave_files() {
        let err = ResizeError::Write {
            path: PathBuf::from("out.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro"),
        };
        assert!(!err.is_untouched());
    }
}
