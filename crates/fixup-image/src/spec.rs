//! Resize settings

use crate::error::ResizeError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Screenshot read and overwritten by default
pub const DEFAULT_INPUT: &str = "public/screenshot.jpg";

/// Backup written next to the default screenshot
pub const DEFAULT_BACKUP: &str = "public/screenshot-backup.jpg";

/// Where and how to resize
///
/// Deserialized from the `[screenshot]` table of a config file; missing keys
/// fall back to [`ResizeSpec::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSpec {
    /// Image to read
    pub input: PathBuf,
    /// Where the resized image goes (usually `input`)
    pub output: PathBuf,
    /// Untouched-size copy of `input`
    pub backup: PathBuf,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// JPEG quality of the backup copy (1-100)
    pub backup_quality: u8,
    /// JPEG quality of the resized output (1-100)
    pub output_quality: u8,
}

impl ResizeSpec {
    /// Create default spec
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize `input` in place, backing it up to a `-backup` sibling
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        self.backup = backup_path_for(&input);
        self.output.clone_from(&input);
        self.input = input;
        self
    }

    /// With explicit backup path
    #[inline]
    #[must_use]
    pub fn with_backup(mut self, backup: impl Into<PathBuf>) -> Self {
        self.backup = backup.into();
        self
    }

    /// With target dimensions
    #[inline]
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check dimensions and qualities
    ///
    /// # Errors
    /// [`ResizeError::InvalidSpec`] for zero dimensions or a quality
    /// outside 1-100
    pub fn validate(&self) -> Result<(), ResizeError> {
        if self.width == 0 || self.height == 0 {
            return Err(ResizeError::InvalidSpec(format!(
                "target size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, quality) in [
            ("backup_quality", self.backup_quality),
            ("output_quality", self.output_quality),
        ] {
            if !(1..=100).contains(&quality) {
                return Err(ResizeError::InvalidSpec(format!(
                    "{name} must be within 1-100, got {quality}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ResizeSpec {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_INPUT),
            backup: PathBuf::from(DEFAULT_BACKUP),
            width: 1200,
            height: 800,
            backup_quality: 95,
            output_quality: 90,
        }
    }
}

/// `dir/name.ext` → `dir/name-backup.ext`
#[must_use]
pub fn backup_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}-backup.{}", ext.to_string_lossy()),
        None => format!("{stem}-backup"),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_screenshot_layout() {
        let spec = ResizeSpec::new();
        assert_eq!(spec.input, PathBuf::from("public/screenshot.jpg"));
        assert_eq!(spec.output, spec.input);
        assert_eq!(spec.backup, PathBuf::from("public/screenshot-backup.jpg"));
        assert_eq!((spec.width, spec.height), (1200, 800));
        assert_eq!((spec.backup_quality, spec.output_quality), (95, 90));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn backup_sibling_keeps_extension() {
        assert_eq!(
            backup_path_for(Path::new("assets/hero.jpeg")),
            PathBuf::from("assets/hero-backup.jpeg")
        );
        assert_eq!(backup_path_for(Path::new("raw")), PathBuf::from("raw-backup"));
    }

    #[test]
    fn with_input_moves_output_and_backup() {
        let spec = ResizeSpec::new().with_input("img/shot.jpg");
        assert_eq!(spec.output, PathBuf::from("img/shot.jpg"));
        assert_eq!(spec.backup, PathBuf::from("img/shot-backup.jpg"));
    }

    #[test]
    fn validate_rejects_zero_size() {
        let spec = ResizeSpec::new().with_size(0, 800);
        assert!(matches!(spec.validate(), Err(ResizeError::InvalidSpec(_))));
    }

    #[test]
    fn validate_rejects_bad_quality() {
        let spec = ResizeSpec {
            output_quality: 0,
            ..ResizeSpec::default()
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("output_quality"));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let spec: ResizeSpec = toml::from_str("width = 600\nheight = 400\n").unwrap();
        assert_eq!((spec.width, spec.height), (600, 400));
        assert_eq!(spec.input, PathBuf::from(DEFAULT_INPUT));
    }
}
