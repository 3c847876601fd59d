//! Fixup CLI
//!
//! Front ends for the three one-shot fixups:
//!
//! - `add-spectator-bet-buttons`: bet buttons under both hands, longer
//!   resolution delay
//! - `fix-spectator-sync`: spectator card and action sync
//! - `resize-screenshot`: 1200x800 store screenshot with a backup
//!
//! All three run with no arguments from the repository root. Logging goes
//! to stderr and is controlled by `RUST_LOG`.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod logging;
pub mod patch_cmd;
pub mod resize_cmd;

pub use config::FixupConfig;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
