//! Patch Layer - file boundary
//!
//! - File → Artifact (ingress)
//! - Recipe application (transformation)
//! - Artifact → File (egress)

use crate::config::{PatchConfig, PatchOptions, DEFAULT_MAX_FILE_SIZE};
use crate::error::{EgressError, IngressError, PatchError, PatchResult};
use crate::recipe::PatchRecipe;
use crate::report::PatchReport;
use chrono::Utc;
use fixup_artifact::{to_lf, Artifact, SourceArtifact};
use std::path::Path;

/// The only component that reads or writes target files
///
/// Line endings are normalised to LF on ingress, so a CRLF checkout is
/// patched like an LF one and written back with LF endings.
#[derive(Debug, Clone)]
pub struct PatchLayer {
    /// Maximum file size to read (bytes)
    max_file_size: usize,
}

impl PatchLayer {
    /// Create layer with the default size limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_file_size(DEFAULT_MAX_FILE_SIZE)
    }

    /// Create layer with a specific size limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Create layer from configuration
    #[inline]
    #[must_use]
    pub fn from_config(config: &PatchConfig) -> Self {
        Self::with_max_file_size(config.max_file_size)
    }

    /// Size limit in bytes
    #[inline]
    #[must_use]
    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Read a target file into a source artifact (Ingress)
    ///
    /// # Errors
    /// - `IngressError::Io` if the file cannot be read
    /// - `IngressError::TooLarge` if it exceeds the size limit
    /// - `IngressError::NotUtf8` if it is not UTF-8
    ///
    /// CRLF and lone CR line endings become LF.
    pub fn ingress(&self, path: impl AsRef<Path>) -> PatchResult<Artifact<SourceArtifact>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| IngressError::io_error(path, e))?;

        if bytes.len() > self.max_file_size {
            return Err(IngressError::TooLarge {
                path: path.to_path_buf(),
                size: bytes.len(),
                max: self.max_file_size,
            }
            .into());
        }

        let text = String::from_utf8(bytes).map_err(|_| IngressError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        if text.contains('\r') {
            tracing::debug!(path = %path.display(), "normalising line endings to LF");
        }
        let artifact = Artifact::<SourceArtifact>::new(to_lf(text))?;
        tracing::debug!(
            path = %path.display(),
            kind = Artifact::<SourceArtifact>::type_id(),
            hash = %artifact.hash().short(),
            "ingress"
        );
        Ok(artifact)
    }

    /// Apply a recipe to an artifact
    ///
    /// The report's `written` flag starts out false.
    ///
    /// # Errors
    /// Returns error if the patched content fails artifact validation
    pub fn apply(
        &self,
        artifact: &Artifact<SourceArtifact>,
        recipe: &PatchRecipe,
        target: impl AsRef<Path>,
    ) -> PatchResult<(Artifact<SourceArtifact>, PatchReport)> {
        let (text, steps) = recipe.apply_text(artifact.content());
        let patched = Artifact::<SourceArtifact>::new(text)?;

        let report = PatchReport {
            recipe: recipe.name().to_owned(),
            target: target.as_ref().to_path_buf(),
            steps,
            before: *artifact.hash(),
            after: *patched.hash(),
            written: false,
            generated_at: Utc::now(),
        };
        Ok((patched, report))
    }

    /// Overwrite a file with the artifact content (Egress)
    ///
    /// No backup is kept.
    ///
    /// # Errors
    /// `EgressError::Io` if the write fails
    pub fn egress(
        &self,
        artifact: &Artifact<SourceArtifact>,
        path: impl AsRef<Path>,
    ) -> Result<(), EgressError> {
        let path = path.as_ref();
        std::fs::write(path, artifact.content()).map_err(|e| EgressError::io_error(path, e))?;
        tracing::debug!(path = %path.display(), hash = %artifact.hash().short(), "egress");
        Ok(())
    }

    /// Ingress, apply and egress in one go
    ///
    /// The file is written even when nothing matched, unless
    /// `options.dry_run` is set or `options.strict` rejects the run.
    ///
    /// # Errors
    /// - Any ingress or egress error
    /// - `PatchError::AnchorsMissing` in strict mode
    pub fn run(
        &self,
        recipe: &PatchRecipe,
        path: impl AsRef<Path>,
        options: PatchOptions,
    ) -> PatchResult<PatchReport> {
        let path = path.as_ref();
        let artifact = self.ingress(path)?;
        let (patched, mut report) = self.apply(&artifact, recipe, path)?;

        if options.strict && !report.is_complete() {
            return Err(PatchError::AnchorsMissing {
                recipe: recipe.name().to_owned(),
                labels: report.missing().into_iter().map(str::to_owned).collect(),
            });
        }

        if options.dry_run {
            tracing::info!(recipe = recipe.name(), path = %path.display(), "dry run, not writing");
            return Ok(report);
        }

        self.egress(&patched, path)?;
        report.written = true;
        Ok(report)
    }
}

impl Default for PatchLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixup_artifact::TextDelta;

    fn recipe() -> PatchRecipe {
        PatchRecipe::new("t", "ok", vec![TextDelta::replace_all("x", "a", "b")])
    }

    #[test]
    fn layer_creation() {
        let layer = PatchLayer::new();
        assert_eq!(layer.max_file_size(), 10 * 1024 * 1024);
    }

    #[test]
    fn from_config_uses_limit() {
        let config = PatchConfig {
            max_file_size: 4,
            ..PatchConfig::default()
        };
        assert_eq!(PatchLayer::from_config(&config).max_file_size(), 4);
    }

    #[test]
    fn ingress_rejects_large_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.tsx");
        std::fs::write(&path, "0123456789").unwrap();

        let result = PatchLayer::with_max_file_size(4).ingress(&path);
        assert!(matches!(
            result,
            Err(PatchError::Ingress(IngressError::TooLarge { size: 10, max: 4, .. }))
        ));
    }

    #[test]
    fn ingress_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.tsx");
        std::fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();

        let result = PatchLayer::new().ingress(&path);
        assert!(matches!(result, Err(PatchError::Ingress(IngressError::NotUtf8 { .. }))));
    }

    #[test]
    fn run_writes_and_marks_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tsx");
        std::fs::write(&path, "aa").unwrap();

        let report = PatchLayer::new().run(&recipe(), &path, PatchOptions::default()).unwrap();
        assert!(report.written);
        assert!(report.changed());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bb");
    }

    #[test]
    fn ingress_normalises_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.tsx");
        std::fs::write(&path, "a\r\nb\rc\n").unwrap();

        let artifact = PatchLayer::new().ingress(&path).unwrap();
        assert_eq!(artifact.content(), "a\nb\nc\n");
    }

    #[test]
    fn carriage_return_in_fragment_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tsx");
        std::fs::write(&path, "a").unwrap();
        let crlf = PatchRecipe::new("crlf", "ok", vec![TextDelta::replace_all("x", "a", "b\r\n")]);

        let result = PatchLayer::new().run(&crlf, &path, PatchOptions::default());
        assert!(matches!(result, Err(PatchError::Artifact(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a");
    }

    #[test]
    fn run_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PatchLayer::new().run(&recipe(), dir.path().join("nope.tsx"), PatchOptions::default());
        assert!(matches!(result, Err(PatchError::Ingress(IngressError::Io { .. }))));
    }
}
