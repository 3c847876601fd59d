//! Source Artifact Type
//!
//! Whole-file UTF-8 text with LF line endings. Anchors and fragments are
//! written with `\n`, so text read from disk goes through [`to_lf`] first.

use crate::artifact::{private, ArtifactError, ArtifactType};
use crate::hash::ContentHash;

/// Source text artifact marker type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceArtifact;

impl private::Sealed for SourceArtifact {}

impl ArtifactType for SourceArtifact {
    type Content = String;

    const TYPE_ID: &'static str = "source";

    #[inline]
    fn hash(content: &Self::Content) -> ContentHash {
        ContentHash::compute(content.as_bytes())
    }

    fn validate_content(content: &Self::Content) -> Result<(), ArtifactError> {
        match content.find('\r') {
            Some(offset) => Err(ArtifactError::InvariantViolation {
                type_id: Self::TYPE_ID,
                reason: format!("carriage return at byte {offset}"),
            }),
            None => Ok(()),
        }
    }
}

/// Convert CRLF and lone CR line endings to LF
#[must_use]
pub fn to_lf(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Artifact;

    #[test]
    fn carriage_returns_are_rejected() {
        let result = Artifact::<SourceArtifact>::new("a\r\nb".to_string());
        assert!(matches!(
            result,
            Err(ArtifactError::InvariantViolation { type_id: "source", .. })
        ));
    }

    #[test]
    fn to_lf_handles_every_ending() {
        assert_eq!(to_lf("a\r\nb\rc\nd".to_string()), "a\nb\nc\nd");
        assert_eq!(to_lf("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn normalised_text_is_accepted() {
        let artifact = Artifact::<SourceArtifact>::new(to_lf("a\r\nb".to_string())).unwrap();
        assert_eq!(artifact.content(), "a\nb");
    }
}
