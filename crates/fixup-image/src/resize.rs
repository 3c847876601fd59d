//! Backup-then-stretch screenshot resize

use crate::error::ResizeError;
use crate::spec::ResizeSpec;
use fixup_artifact::{Artifact, BinaryArtifact, ContentHash};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a successful resize did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizeReport {
    /// Input dimensions
    pub original: (u32, u32),
    /// Output dimensions
    pub resized: (u32, u32),
    /// Hash of the input bytes as read
    pub original_hash: ContentHash,
    /// Where the original-size copy went
    pub backup: PathBuf,
    /// Backup size in bytes
    pub backup_bytes: u64,
    /// Resized file
    pub output: PathBuf,
    /// Output size in bytes
    pub output_bytes: u64,
}

impl ResizeReport {
    /// Input width divided by height
    #[must_use]
    pub fn original_aspect(&self) -> f64 {
        f64::from(self.original.0) / f64::from(self.original.1.max(1))
    }

    /// Output size in KiB
    #[must_use]
    pub fn output_kib(&self) -> f64 {
        // Screenshot sizes stay far below f64's exact integer range.
        #[allow(clippy::cast_precision_loss)]
        let bytes = self.output_bytes as f64;
        bytes / 1024.0
    }

    /// Output ratio in lowest terms, e.g. `3:2`
    #[must_use]
    pub fn resized_ratio(&self) -> String {
        let (w, h) = self.resized;
        let d = gcd(w, h).max(1);
        format!("{}:{}", w / d, h / d)
    }

    /// Output ratio plus its decimal, e.g. `3:2 (1.5:1)`
    #[must_use]
    pub fn resized_aspect_label(&self) -> String {
        let (w, h) = self.resized;
        let decimal = f64::from(w) / f64::from(h.max(1));
        format!("{} ({decimal}:1)", self.resized_ratio())
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Back up, stretch and overwrite the screenshot described by `spec`
///
/// Steps, in order:
/// 1. validate `spec` and check the input exists (nothing touched on failure)
/// 2. decode the input
/// 3. write the backup at `spec.backup_quality`, original size
/// 4. resize to exactly `spec.width × spec.height` (Lanczos3, no aspect preservation)
/// 5. write the output at `spec.output_quality`
///
/// A backup written in step 3 stays on disk if a later step fails.
///
/// # Errors
/// See [`ResizeError`]; [`ResizeError::is_untouched`] tells whether any
/// file was written before the failure.
pub fn resize_screenshot(spec: &ResizeSpec) -> Result<ResizeReport, ResizeError> {
    spec.validate()?;

    if !spec.input.exists() {
        return Err(ResizeError::InputMissing {
            path: spec.input.clone(),
        });
    }

    let input = read_artifact(&spec.input)?;
    let image = image::load_from_memory(input.content().data()).map_err(|source| {
        ResizeError::Decode {
            path: spec.input.clone(),
            source,
        }
    })?;
    let original = image.dimensions();
    tracing::debug!(
        input = %spec.input.display(),
        kind = Artifact::<BinaryArtifact>::type_id(),
        bytes = input.content().data().len(),
        hash = %input.hash().short(),
        width = original.0,
        height = original.1,
        "decoded screenshot"
    );

    let backup_bytes = write_jpeg(&image, spec.backup_quality, &spec.backup)?;
    tracing::info!(backup = %spec.backup.display(), bytes = backup_bytes, "backup written");

    let resized = image.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
    let output_bytes = write_jpeg(&resized, spec.output_quality, &spec.output)?;
    tracing::info!(
        output = %spec.output.display(),
        width = spec.width,
        height = spec.height,
        bytes = output_bytes,
        "screenshot resized"
    );

    Ok(ResizeReport {
        original,
        resized: resized.dimensions(),
        original_hash: *input.hash(),
        backup: spec.backup.clone(),
        backup_bytes,
        output: spec.output.clone(),
        output_bytes,
    })
}

fn read_artifact(path: &Path) -> Result<Artifact<BinaryArtifact>, ResizeError> {
    let bytes = std::fs::read(path).map_err(|source| ResizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Binary artifacts carry no content invariants.
    Artifact::<BinaryArtifact>::new(bytes.into()).map_err(|e| ResizeError::Read {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

/// Encode as baseline RGB JPEG in memory, then write; returns bytes written
fn write_jpeg(image: &DynamicImage, quality: u8, path: &Path) -> Result<u64, ResizeError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&image.to_rgb8())
        .map_err(|source| ResizeError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    std::fs::write(path, &buf).map_err(|source| ResizeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(buf.len() as u64)
}
