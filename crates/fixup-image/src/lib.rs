//! Fixup Image
//!
//! Stretches the store screenshot to the fixed 3:2 size embeds require,
//! keeping a full-size backup next to it.
//!
//! ```rust,no_run
//! use fixup_image::{resize_screenshot, ResizeSpec};
//!
//! let report = resize_screenshot(&ResizeSpec::default())?;
//! assert_eq!(report.resized, (1200, 800));
//! # Ok::<(), fixup_image::ResizeError>(())
//! ```

#![warn(unreachable_pub)]

mod error;
mod resize;
mod spec;

pub use error::ResizeError;
pub use resize::{resize_screenshot, ResizeReport};
pub use spec::{backup_path_for, ResizeSpec, DEFAULT_BACKUP, DEFAULT_INPUT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
