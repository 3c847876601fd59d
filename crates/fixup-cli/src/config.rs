//! Optional TOML configuration
//!
//! ```toml
//! [patch]
//! target = "components/PokerBattleTable.tsx"
//! strict = false
//!
//! [screenshot]
//! input = "public/screenshot.jpg"
//! width = 1200
//! height = 800
//! ```

use anyhow::Context;
use fixup_image::ResizeSpec;
use fixup_patch::PatchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for all three tools
///
/// Precedence: command-line flags, then this file, then built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixupConfig {
    /// Source patch settings
    pub patch: PatchConfig,
    /// Screenshot resize settings
    pub screenshot: ResizeSpec,
}

impl FixupConfig {
    /// Load from `path`, or return defaults when no path is given
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
