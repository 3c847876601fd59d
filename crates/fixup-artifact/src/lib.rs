//! Fixup Artifact System
//!
//! Content-addressed artifacts and literal text deltas shared by the
//! patch and image tools.
//!
//! # Core Concepts
//!
//! - [`Artifact<T>`]: Content-addressed container for typed content
//! - [`ArtifactType`]: Sealed trait for artifact kinds (source, binary)
//! - [`ContentHash`]: 32-byte Blake3 hash
//! - [`TextDelta`]: Labelled literal edit with a [`DeltaOutcome`]
//!
//! # Example
//!
//! ```rust
//! use fixup_artifact::{Artifact, DeltaOutcome, SourceArtifact, TextDelta};
//!
//! let source = Artifact::<SourceArtifact>::new("}, 3000);".to_string()).unwrap();
//! let delta = TextDelta::replace_all("timer", "}, 3000);", "}, 5000);");
//! let (patched, outcome) = delta.apply(source.content());
//!
//! assert_eq!(patched, "}, 5000);");
//! assert_eq!(outcome, DeltaOutcome::Applied { count: 1 });
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod artifact;
mod delta;
mod hash;

pub mod types;

pub use artifact::{Artifact, ArtifactError, ArtifactType};
pub use delta::{DeltaOperation, DeltaOutcome, TextDelta};
pub use hash::{ContentHash, HashError};
pub use types::{to_lf, BinaryArtifact, BinaryContent, SourceArtifact};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
