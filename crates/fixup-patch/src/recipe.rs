//! Named, ordered sets of text deltas

use crate::report::StepReport;
use fixup_artifact::{DeltaOutcome, TextDelta};

/// File both table recipes edit when no path is given
pub const DEFAULT_TARGET: &str = "components/PokerBattleTable.tsx";

/// A named list of deltas applied in order
///
/// Each delta sees the output of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecipe {
    name: String,
    success_message: String,
    deltas: Vec<TextDelta>,
}

impl PatchRecipe {
    /// Create a recipe
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        success_message: impl Into<String>,
        deltas: Vec<TextDelta>,
    ) -> Self {
        Self {
            name: name.into(),
            success_message: success_message.into(),
            deltas,
        }
    }

    /// Recipe name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed message printed after a run
    #[inline]
    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Deltas in application order
    #[inline]
    #[must_use]
    pub fn deltas(&self) -> &[TextDelta] {
        &self.deltas
    }

    /// Apply every delta to `text`
    #[must_use]
    pub fn apply_text(&self, text: &str) -> (String, Vec<StepReport>) {
        let mut current = text.to_owned();
        let mut steps = Vec::with_capacity(self.deltas.len());

        for delta in &self.deltas {
            let (next, outcome) = delta.apply(&current);
            match outcome {
                DeltaOutcome::Applied { count } => {
                    tracing::info!(recipe = %self.name, step = delta.label(), count, "step applied");
                }
                DeltaOutcome::AlreadyApplied => {
                    tracing::info!(recipe = %self.name, step = delta.label(), "step already applied");
                }
                DeltaOutcome::AnchorMissing => {
                    tracing::warn!(
                        recipe = %self.name,
                        step = delta.label(),
                        kind = delta.operation().kind(),
                        "anchor not found, step skipped"
                    );
                }
            }
            current = next;
            steps.push(StepReport {
                label: delta.label().to_owned(),
                outcome,
            });
        }

        (current, steps)
    }
}
