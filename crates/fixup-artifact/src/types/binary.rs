//! Binary Artifact Type
//!
//! Raw byte content. Used for assets that are decoded elsewhere (images).

use crate::artifact::{private, ArtifactType};
use crate::hash::ContentHash;

/// Binary artifact marker type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryArtifact;

impl private::Sealed for BinaryArtifact {}

impl ArtifactType for BinaryArtifact {
    type Content = BinaryContent;

    const TYPE_ID: &'static str = "binary";

    #[inline]
    fn hash(content: &Self::Content) -> ContentHash {
        ContentHash::compute(&content.0)
    }
}

/// Binary content - raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryContent(Vec<u8>);

impl BinaryContent {
    /// Create from byte vector
    #[inline]
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Get reference to bytes
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.0
    }

}

impl From<Vec<u8>> for BinaryContent {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for BinaryContent {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}
