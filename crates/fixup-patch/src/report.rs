//! Per-run patch reports

use chrono::{DateTime, Utc};
use fixup_artifact::{ContentHash, DeltaOutcome};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Outcome of a single recipe step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Step label
    pub label: String,
    /// What the step did
    pub outcome: DeltaOutcome,
}

impl Display for StepReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.outcome)
    }
}

/// Result of running one recipe against one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    /// Recipe name
    pub recipe: String,
    /// File the recipe ran against
    pub target: PathBuf,
    /// One entry per delta, in order
    pub steps: Vec<StepReport>,
    /// Hash of the content as read, after LF normalisation
    pub before: ContentHash,
    /// Hash of the content after all steps
    pub after: ContentHash,
    /// False for dry runs and strict-mode refusals
    pub written: bool,
    /// When the recipe ran
    pub generated_at: DateTime<Utc>,
}

impl PatchReport {
    /// True when the recipe modified the content
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// Labels of steps whose anchor was not found
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.outcome.is_missing())
            .map(|s| s.label.as_str())
            .collect()
    }

    /// True when no step reported a missing anchor
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.steps.iter().any(|s| s.outcome.is_missing())
    }
}
