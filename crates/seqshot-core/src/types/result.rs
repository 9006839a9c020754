use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequence and shot labels extracted from one path.
///
/// Labels are the literal substrings found in the path (original case and
/// digit padding, separators excluded). A label that was not found is
/// `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeqShot {
    /// Sequence label, e.g. `SQ01`, `ABC01`, `01`.
    pub sequence: Option<String>,

    /// Shot label, e.g. `SH010`, `0100`.
    pub shot: Option<String>,
}

impl SeqShot {
    #[must_use]
    pub fn new(sequence: Option<String>, shot: Option<String>) -> Self {
        Self { sequence, shot }
    }

    /// A result with neither label.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if neither label was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_none() && self.shot.is_none()
    }

    /// Returns `true` if both labels were found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sequence.is_some() && self.shot.is_some()
    }

    /// Borrowed `(sequence, shot)` pair.
    #[must_use]
    pub fn as_tuple(&self) -> (Option<&str>, Option<&str>) {
        (self.sequence.as_deref(), self.shot.as_deref())
    }

    /// Owned `(sequence, shot)` pair.
    #[must_use]
    pub fn into_tuple(self) -> (Option<String>, Option<String>) {
        (self.sequence, self.shot)
    }

    /// Template variables understood by display-name and file-name
    /// templates: `sq`, `seq`, `sequence`, `sh` and `shot`.
    ///
    /// A key is only present when its label was found.
    #[must_use]
    pub fn template_tokens(&self) -> BTreeMap<&'static str, String> {
        let mut tokens = BTreeMap::new();
        if let Some(ref sequence) = self.sequence {
            for key in ["sq", "seq", "sequence"] {
                tokens.insert(key, sequence.clone());
            }
        }
        if let Some(ref shot) = self.shot {
            for key in ["sh", "shot"] {
                tokens.insert(key, shot.clone());
            }
        }
        tokens
    }
}

impl From<SeqShot> for (Option<String>, Option<String>) {
    fn from(value: SeqShot) -> Self {
        value.into_tuple()
    }
}

impl fmt::Display for SeqShot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence={}, shot={}",
            self.sequence.as_deref().unwrap_or("-"),
            self.shot.as_deref().unwrap_or("-")
        )
    }
}
