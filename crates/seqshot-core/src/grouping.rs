//! Grouping and filtering of annotated paths, as used by asset views to
//! build per-sequence and per-shot listings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Annotated, SeqShot};

/// Paths keyed by sequence label, then by shot label. `None` keys collect
/// paths where that label was not found.
pub type SequenceTree = BTreeMap<Option<String>, BTreeMap<Option<String>, Vec<String>>>;

/// Groups annotated paths by sequence, then shot. Paths keep their input
/// order within each leaf.
pub fn group_by_sequence(annotated: &[Annotated]) -> SequenceTree {
    let mut tree = SequenceTree::new();
    for item in annotated {
        tree.entry(item.tokens.sequence.clone())
            .or_default()
            .entry(item.tokens.shot.clone())
            .or_default()
            .push(item.path.clone());
    }
    tree
}

/// Label criteria for narrowing a listing down to one sequence and/or shot.
///
/// Comparison ignores ASCII case, so `sq01` selects `SQ01`. An unset
/// criterion accepts anything; a set criterion rejects a missing label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFilter {
    pub sequence: Option<String>,
    pub shot: Option<String>,
}

impl TokenFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    #[must_use]
    pub fn with_shot(mut self, shot: impl Into<String>) -> Self {
        self.shot = Some(shot.into());
        self
    }

    /// Returns `true` if no criterion is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.sequence.is_none() && self.shot.is_none()
    }

    #[must_use]
    pub fn matches(&self, tokens: &SeqShot) -> bool {
        criterion_matches(self.sequence.as_deref(), tokens.sequence.as_deref())
            && criterion_matches(self.shot.as_deref(), tokens.shot.as_deref())
    }

    /// Keeps the annotated paths accepted by this filter.
    pub fn apply<'a, I>(&'a self, annotated: I) -> impl Iterator<Item = Annotated> + 'a
    where
        I: IntoIterator<Item = Annotated>,
        I::IntoIter: 'a,
    {
        annotated
            .into_iter()
            .filter(move |item| self.matches(&item.tokens))
    }
}

fn criterion_matches(wanted: Option<&str>, found: Option<&str>) -> bool {
    match (wanted, found) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(wanted), Some(found)) => wanted.eq_ignore_ascii_case(found),
    }
}
