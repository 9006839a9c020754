use serde::{Deserialize, Serialize};

use super::result::SeqShot;

/// A path paired with the labels extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotated {
    pub path: String,

    #[serde(flatten)]
    pub tokens: SeqShot,
}

impl Annotated {
    #[must_use]
    pub fn new(path: impl Into<String>, tokens: SeqShot) -> Self {
        Self {
            path: path.into(),
            tokens,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&str> {
        self.tokens.sequence.as_deref()
    }

    #[must_use]
    pub fn shot(&self) -> Option<&str> {
        self.tokens.shot.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_labels_next_to_path() {
        let a = Annotated::new(
            "/show/SQ01/SH010/a.ma",
            SeqShot::new(Some("SQ01".into()), Some("SH010".into())),
        );
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["path"], "/show/SQ01/SH010/a.ma");
        assert_eq!(json["sequence"], "SQ01");
        assert_eq!(json["shot"], "SH010");
    }

    #[test]
    fn accessors() {
        let a = Annotated::new("/show/x.ma", SeqShot::none());
        assert_eq!(a.sequence(), None);
        assert_eq!(a.shot(), None);
    }
}
