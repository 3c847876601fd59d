//! Artifact Type Implementations
//!
//! - Source: whole-file UTF-8 text with LF line endings
//! - Binary: raw byte content

pub mod binary;
pub mod source;

pub use binary::{BinaryArtifact, BinaryContent};
pub use source::{to_lf, SourceArtifact};
