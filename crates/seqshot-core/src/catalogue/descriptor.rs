//! # Pattern Descriptors
//!
//! Typed, data-only description of every token template. A descriptor knows
//! its kind, the prefix form of each token it captures, the separator rule
//! and the digit bounds. Rendering to a regex source happens in exactly one
//! place ([`PatternDescriptor::source`]).

use std::fmt;

/// Characters accepted as a token separator.
pub const SEPARATOR_CLASS: &str = r"[_\-/]";

/// Inclusive digit bounds for a numeric token body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitBounds {
    pub min: u8,
    pub max: u8,
}

impl DigitBounds {
    fn source(self) -> String {
        format!(r"\d{{{},{}}}", self.min, self.max)
    }
}

/// Sequence tokens carry 2 to 5 digits.
pub const SEQUENCE_DIGITS: DigitBounds = DigitBounds { min: 2, max: 5 };

/// Shot tokens carry 3 to 5 digits.
pub const SHOT_DIGITS: DigitBounds = DigitBounds { min: 3, max: 5 };

/// Prefix form of a sequence token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceForm {
    /// `SQ01`
    Sq,
    /// `SEQ01`
    Seq,
    /// `SEQUENCE01`
    Sequence,
    /// Three or four letters, e.g. `ABC01`, `ABCD0010`
    LetterCode,
    /// Digits only, e.g. `01`
    Numeric,
}

impl SequenceForm {
    /// All forms in priority order.
    pub const ALL: [SequenceForm; 5] = [
        Self::Sq,
        Self::Seq,
        Self::Sequence,
        Self::LetterCode,
        Self::Numeric,
    ];

    /// Returns `true` unless the form is bare digits.
    #[must_use]
    pub fn is_prefixed(self) -> bool {
        !matches!(self, Self::Numeric)
    }

    fn prefix_source(self) -> &'static str {
        match self {
            Self::Sq => "SQ",
            Self::Seq => "SEQ",
            Self::Sequence => "SEQUENCE",
            Self::LetterCode => "[A-Z]{3,4}",
            Self::Numeric => "",
        }
    }

    fn source(self) -> String {
        format!("{}{}", self.prefix_source(), SEQUENCE_DIGITS.source())
    }
}

impl fmt::Display for SequenceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sq => write!(f, "SQ"),
            Self::Seq => write!(f, "SEQ"),
            Self::Sequence => write!(f, "SEQUENCE"),
            Self::LetterCode => write!(f, "letters"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// Prefix form of a shot token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotForm {
    /// `SH010`
    Sh,
    /// `SHOT010`
    Shot,
    /// Digits only, e.g. `0100`
    Numeric,
}

impl ShotForm {
    /// All forms in priority order.
    pub const ALL: [ShotForm; 3] = [Self::Sh, Self::Shot, Self::Numeric];

    /// Returns `true` unless the form is bare digits.
    #[must_use]
    pub fn is_prefixed(self) -> bool {
        !matches!(self, Self::Numeric)
    }

    fn prefix_source(self) -> &'static str {
        match self {
            Self::Sh => "SH",
            Self::Shot => "SHOT",
            Self::Numeric => "",
        }
    }

    fn source(self) -> String {
        format!("{}{}", self.prefix_source(), SHOT_DIGITS.source())
    }
}

impl fmt::Display for ShotForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sh => write!(f, "SH"),
            Self::Shot => write!(f, "SHOT"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// Whether a separator must sit at the token boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Optional,
    Required,
}

impl Separator {
    /// Bare digits need a separator; prefixed tokens are self-delimiting.
    fn for_prefixed(prefixed: bool) -> Self {
        if prefixed {
            Self::Optional
        } else {
            Self::Required
        }
    }

    fn source(self) -> String {
        match self {
            Self::Optional => format!("{SEPARATOR_CLASS}?"),
            Self::Required => SEPARATOR_CLASS.to_string(),
        }
    }
}

/// What a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Sequence and shot together, slash-bounded on both sides.
    Combined {
        sequence: SequenceForm,
        shot: ShotForm,
    },
    /// A sequence token right after a slash.
    Sequence(SequenceForm),
    /// A shot token anywhere in the haystack.
    Shot(ShotForm),
}

/// Typed description of one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternDescriptor {
    pub kind: PatternKind,
    /// Separator between the tokens (combined), after the sequence
    /// (sequence-only) or before the shot (shot-only).
    pub separator: Separator,
}

impl PatternDescriptor {
    /// Sequence immediately followed by shot, e.g. `/SQ01_SH010/`.
    #[must_use]
    pub fn combined(sequence: SequenceForm, shot: ShotForm) -> Self {
        Self {
            kind: PatternKind::Combined { sequence, shot },
            separator: Separator::for_prefixed(shot.is_prefixed()),
        }
    }

    /// Standalone sequence, e.g. `/SEQ01`.
    #[must_use]
    pub fn sequence(form: SequenceForm) -> Self {
        Self {
            kind: PatternKind::Sequence(form),
            separator: Separator::for_prefixed(form.is_prefixed()),
        }
    }

    /// Standalone shot, e.g. `SH010` or `_0100`.
    #[must_use]
    pub fn shot(form: ShotForm) -> Self {
        Self {
            kind: PatternKind::Shot(form),
            separator: Separator::for_prefixed(form.is_prefixed()),
        }
    }

    /// Renders the case-insensitive regex source with `sequence` and/or
    /// `shot` named groups.
    #[must_use]
    pub fn source(&self) -> String {
        let sep = self.separator.source();
        match self.kind {
            PatternKind::Combined { sequence, shot } => format!(
                "(?i)/(?P<sequence>{}){sep}(?P<shot>{})/",
                sequence.source(),
                shot.source()
            ),
            PatternKind::Sequence(form) => format!("(?i)/(?P<sequence>{}){sep}", form.source()),
            PatternKind::Shot(form) => format!("(?i){sep}(?P<shot>{})", form.source()),
        }
    }
}

impl fmt::Display for PatternDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PatternKind::Combined { sequence, shot } => write!(f, "combined({sequence}+{shot})"),
            PatternKind::Sequence(form) => write!(f, "sequence({form})"),
            PatternKind::Shot(form) => write!(f, "shot({form})"),
        }
    }
}
