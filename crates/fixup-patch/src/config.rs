//! Patch configuration

use crate::recipe::DEFAULT_TARGET;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default ingress size limit (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Settings for the patch tools
///
/// Deserialized from the `[patch]` table of a config file; missing keys
/// fall back to [`PatchConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// File to patch
    pub target: PathBuf,
    /// Refuse files larger than this many bytes
    pub max_file_size: usize,
    /// Fail instead of writing when an anchor is missing
    pub strict: bool,
}

impl PatchConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With target file
    #[inline]
    #[must_use]
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    /// With strict mode
    #[inline]
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            strict: false,
        }
    }
}

/// Per-run switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Compute the report but never write
    pub dry_run: bool,
    /// Fail instead of writing when an anchor is missing
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_battle_table() {
        let config = PatchConfig::new();
        assert_eq!(config.target, PathBuf::from("components/PokerBattleTable.tsx"));
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert!(!config.strict);
    }

    #[test]
    fn builders_override_fields() {
        let config = PatchConfig::new().with_target("a.tsx").with_strict(true);
        assert_eq!(config.target, PathBuf::from("a.tsx"));
        assert!(config.strict);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: PatchConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.target, PathBuf::from(DEFAULT_TARGET));
    }
}
