//! Artifact type trait and the content-addressed [`Artifact`] container
//!
//! This is a sealed trait - only crate-internal types can implement it.

use crate::hash::ContentHash;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Trait for artifact types
///
/// Implemented for each kind of file the tools touch (source text, binary
/// assets). Sealed: the set of artifact kinds is closed.
///
/// # Contract
/// - `hash` must be deterministic (same content, same hash)
/// - `TYPE_ID` must be unique across artifact types
pub trait ArtifactType: Send + Sync + 'static + Debug + private::Sealed {
    /// The content type for this artifact
    type Content: Send + Sync + 'static + Debug + Clone + PartialEq;

    /// Artifact type identifier
    const TYPE_ID: &'static str;

    /// Compute content hash
    fn hash(content: &Self::Content) -> ContentHash;

    /// Validate content invariants
    ///
    /// Default implementation always succeeds.
    ///
    /// # Errors
    /// Returns error if content violates invariants
    fn validate_content(_content: &Self::Content) -> Result<(), ArtifactError> {
        Ok(())
    }
}

#[doc(hidden)]
pub mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}

/// Errors related to artifact operations
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Content invariant violation
    #[error("{type_id} content invariant violated: {reason}")]
    InvariantViolation {
        /// `TYPE_ID` of the rejecting artifact type
        type_id: &'static str,
        /// What was wrong
        reason: String,
    },
}

/// Content-addressed typed artifact
///
/// # Invariants
/// - `hash` is always `T::hash(&content)`
/// - Immutable after construction
#[derive(Debug, PartialEq, Eq)]
pub struct Artifact<T: ArtifactType> {
    hash: ContentHash,
    content: T::Content,
    _phantom: PhantomData<T>,
}

impl<T: ArtifactType> Clone for Artifact<T> {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash,
            content: self.content.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ArtifactType> Artifact<T> {
    /// Create new artifact (computes hash and validates)
    ///
    /// # Errors
    /// Returns error if content validation fails
    pub fn new(content: T::Content) -> Result<Self, ArtifactError> {
        T::validate_content(&content)?;
        let hash = T::hash(&content);
        Ok(Self {
            hash,
            content,
            _phantom: PhantomData,
        })
    }

    /// Content hash
    #[inline]
    #[must_use]
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Reference to content
    #[inline]
    #[must_use]
    pub fn content(&self) -> &T::Content {
        &self.content
    }

    /// Get type identifier
    #[inline]
    #[must_use]
    pub fn type_id() -> &'static str {
        T::TYPE_ID
    }
}
