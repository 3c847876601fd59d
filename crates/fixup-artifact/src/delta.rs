//! Literal text deltas
//!
//! A [`TextDelta`] is a labelled, literal edit on source text. Deltas never
//! fail: when their anchor is absent the text comes back untouched and the
//! [`DeltaOutcome`] says why.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Literal edit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaOperation {
    /// Insert `fragment` between `context` and `anchor`
    ///
    /// Matches the first occurrence of `context + anchor` only.
    InsertBefore {
        context: String,
        anchor: String,
        fragment: String,
    },

    /// Replace the first occurrence of `find`
    ReplaceFirst { find: String, replace: String },

    /// Replace every occurrence of `find`
    ReplaceAll { find: String, replace: String },
}

impl DeltaOperation {
    /// Text this operation leaves behind once applied
    #[must_use]
    pub fn product(&self) -> &str {
        match self {
            Self::InsertBefore { fragment, .. } => fragment,
            Self::ReplaceFirst { replace, .. } | Self::ReplaceAll { replace, .. } => replace,
        }
    }

    /// Short operation name for logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsertBefore { .. } => "insert-before",
            Self::ReplaceFirst { .. } => "replace-first",
            Self::ReplaceAll { .. } => "replace-all",
        }
    }
}

/// What happened when a delta met a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeltaOutcome {
    /// Text changed; `count` occurrences were rewritten
    Applied { count: usize },
    /// Anchor absent but the delta's product is already present
    ///
    /// Only the product is checked. Text that never held the anchor but
    /// happens to contain the replacement (`}, 5000);` with no
    /// `}, 3000);`) lands here rather than in [`Self::AnchorMissing`].
    AlreadyApplied,
    /// Anchor absent and no trace of a previous application
    AnchorMissing,
}

impl DeltaOutcome {
    /// True when the text was modified
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// True when the anchor could not be found at all
    #[inline]
    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, Self::AnchorMissing)
    }
}

impl Display for DeltaOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied { count: 1 } => f.write_str("applied"),
            Self::Applied { count } => write!(f, "applied ({count} occurrences)"),
            Self::AlreadyApplied => f.write_str("already applied"),
            Self::AnchorMissing => f.write_str("anchor missing"),
        }
    }
}

/// Labelled literal edit
///
/// # Invariants
/// - A non-[`DeltaOutcome::Applied`] outcome returns the input byte-for-byte
/// - An empty search string never matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    label: String,
    operation: DeltaOperation,
}

impl TextDelta {
    /// Create a delta from an operation
    #[must_use]
    pub fn new(label: impl Into<String>, operation: DeltaOperation) -> Self {
        Self {
            label: label.into(),
            operation,
        }
    }

    /// Insert `fragment` right before `anchor`, where `anchor` must be
    /// preceded by `context`
    #[must_use]
    pub fn insert_before(
        label: impl Into<String>,
        context: impl Into<String>,
        anchor: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self::new(
            label,
            DeltaOperation::InsertBefore {
                context: context.into(),
                anchor: anchor.into(),
                fragment: fragment.into(),
            },
        )
    }

    /// Replace the first occurrence of `find`
    #[must_use]
    pub fn replace_first(
        label: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self::new(
            label,
            DeltaOperation::ReplaceFirst {
                find: find.into(),
                replace: replace.into(),
            },
        )
    }

    /// Replace every occurrence of `find`
    #[must_use]
    pub fn replace_all(
        label: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self::new(
            label,
            DeltaOperation::ReplaceAll {
                find: find.into(),
                replace: replace.into(),
            },
        )
    }

    /// Step label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Operation
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &DeltaOperation {
        &self.operation
    }

    /// Apply the delta to `text`
    #[must_use]
    pub fn apply(&self, text: &str) -> (String, DeltaOutcome) {
        let rewritten = match &self.operation {
            DeltaOperation::InsertBefore {
                context,
                anchor,
                fragment,
            } => insert_before(text, context, anchor, fragment),
            DeltaOperation::ReplaceFirst { find, replace } => {
                (!find.is_empty() && text.contains(find.as_str()))
                    .then(|| (text.replacen(find.as_str(), replace, 1), 1))
            }
            DeltaOperation::ReplaceAll { find, replace } => {
                let count = if find.is_empty() {
                    0
                } else {
                    text.matches(find.as_str()).count()
                };
                (count > 0).then(|| (text.replace(find.as_str(), replace), count))
            }
        };

        match rewritten {
            Some((out, count)) => (out, DeltaOutcome::Applied { count }),
            None => {
                let product = self.operation.product();
                let outcome = if !product.is_empty() && text.contains(product) {
                    DeltaOutcome::AlreadyApplied
                } else {
                    DeltaOutcome::AnchorMissing
                };
                (text.to_owned(), outcome)
            }
        }
    }
}

fn insert_before(
    text: &str,
    context: &str,
    anchor: &str,
    fragment: &str,
) -> Option<(String, usize)> {
    let needle_len = context.len() + anchor.len();
    if needle_len == 0 {
        return None;
    }
    let needle = format!("{context}{anchor}");
    let pos = text.find(&needle)?;

    let mut out = String::with_capacity(text.len() + fragment.len());
    out.push_str(&text[..pos]);
    out.push_str(context);
    out.push_str(fragment);
    out.push_str(anchor);
    out.push_str(&text[pos + needle_len..]);
    Some((out, 1))
}
