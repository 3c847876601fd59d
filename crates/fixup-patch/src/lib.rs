//! Fixup Patch Layer
//!
//! Literal, recipe-driven edits of the poker battle table source.
//!
//! # Core Operations
//!
//! - **Ingress**: Read a file into an `Artifact<SourceArtifact>`
//! - **Apply**: Run a [`PatchRecipe`] and collect a [`PatchReport`]
//! - **Egress**: Write the patched artifact back in place
//!
//! ```text
//! File → ingress → Artifact → PatchRecipe (TextDelta…) → Artifact' → egress → File
//!                                     ↓
//!                                PatchReport
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use fixup_patch::{recipes, PatchLayer, PatchOptions};
//!
//! # fn example() -> Result<(), fixup_patch::PatchError> {
//! let layer = PatchLayer::new();
//! let recipe = recipes::bet_buttons::recipe();
//! let report = layer.run(&recipe, "components/PokerBattleTable.tsx", PatchOptions::default())?;
//! println!("{}", recipe.success_message());
//! assert!(report.written);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod layer;
pub mod recipe;
pub mod recipes;
pub mod report;

pub use config::{PatchConfig, PatchOptions};
pub use error::{EgressError, IngressError, PatchError, PatchResult};
pub use layer::PatchLayer;
pub use recipe::{PatchRecipe, DEFAULT_TARGET};
pub use report::{PatchReport, StepReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
