//! # Pattern Catalogue
//!
//! The fixed, ordered set of token templates. Three lists are evaluated
//! top-to-bottom and the first match wins within each:
//!
//! 1. combined patterns (every sequence form x every shot form),
//! 2. sequence-only patterns,
//! 3. shot-only patterns.
//!
//! Explicit prefixes always come before letter codes, and letter codes
//! before bare digits.

pub mod descriptor;

use regex::Regex;

use crate::error::{Result, SeqShotError};

pub use descriptor::{
    DigitBounds, PatternDescriptor, PatternKind, SEQUENCE_DIGITS, SHOT_DIGITS, Separator,
    SequenceForm, ShotForm,
};

/// Labels captured by a single pattern match, borrowed from the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCapture<'h> {
    pub sequence: Option<&'h str>,
    pub shot: Option<&'h str>,
}

/// A descriptor together with its compiled regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    descriptor: PatternDescriptor,
    regex: Regex,
}

impl CompiledPattern {
    /// Compiles the given descriptor.
    ///
    /// # Errors
    ///
    /// Returns `SeqShotError::Pattern` if the rendered source is rejected by
    /// the regex engine.
    pub fn compile(descriptor: PatternDescriptor) -> Result<Self> {
        let regex = Regex::new(&descriptor.source()).map_err(|source| SeqShotError::Pattern {
            pattern: descriptor.to_string(),
            source,
        })?;
        Ok(Self { descriptor, regex })
    }

    /// The descriptor this pattern was compiled from.
    #[must_use]
    pub fn descriptor(&self) -> &PatternDescriptor {
        &self.descriptor
    }

    /// Searches `haystack` for the leftmost match and returns the labels it
    /// captured.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<TokenCapture<'h>> {
        self.regex.captures(haystack).map(|caps| TokenCapture {
            sequence: caps.name("sequence").map(|m| m.as_str()),
            shot: caps.name("shot").map(|m| m.as_str()),
        })
    }
}

/// The three ordered pattern lists used by the engine.
#[derive(Debug, Clone)]
pub struct Catalogue {
    combined: Vec<CompiledPattern>,
    sequence: Vec<CompiledPattern>,
    shot: Vec<CompiledPattern>,
}

impl Catalogue {
    /// Compiles the full catalogue.
    ///
    /// # Errors
    ///
    /// Returns `SeqShotError::Pattern` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            combined: compile_all(combined_descriptors())?,
            sequence: compile_all(sequence_descriptors())?,
            shot: compile_all(shot_descriptors())?,
        })
    }

    /// Combined patterns in priority order.
    #[must_use]
    pub fn combined(&self) -> &[CompiledPattern] {
        &self.combined
    }

    /// Sequence-only patterns in priority order.
    #[must_use]
    pub fn sequence(&self) -> &[CompiledPattern] {
        &self.sequence
    }

    /// Shot-only patterns in priority order.
    #[must_use]
    pub fn shot(&self) -> &[CompiledPattern] {
        &self.shot
    }

    /// Total number of patterns across all three lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.combined.len() + self.sequence.len() + self.shot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sequence form is the outer loop, shot form the inner one.
pub fn combined_descriptors() -> Vec<PatternDescriptor> {
    SequenceForm::ALL
        .iter()
        .flat_map(|&sequence| {
            ShotForm::ALL
                .iter()
                .map(move |&shot| PatternDescriptor::combined(sequence, shot))
        })
        .collect()
}

pub fn sequence_descriptors() -> Vec<PatternDescriptor> {
    SequenceForm::ALL
        .iter()
        .map(|&form| PatternDescriptor::sequence(form))
        .collect()
}

pub fn shot_descriptors() -> Vec<PatternDescriptor> {
    ShotForm::ALL
        .iter()
        .map(|&form| PatternDescriptor::shot(form))
        .collect()
}

fn compile_all(descriptors: Vec<PatternDescriptor>) -> Result<Vec<CompiledPattern>> {
    descriptors.into_iter().map(CompiledPattern::compile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    fn first_hit<'h>(patterns: &[CompiledPattern], haystack: &'h str) -> Option<TokenCapture<'h>> {
        patterns.iter().find_map(|p| p.find(haystack))
    }

    #[test]
    fn catalogue_sizes() {
        let c = catalogue();
        assert_eq!(c.combined().len(), 15);
        assert_eq!(c.sequence().len(), 5);
        assert_eq!(c.shot().len(), 3);
        assert_eq!(c.len(), 23);
        assert!(!c.is_empty());
    }

    #[test]
    fn combined_priority_order() {
        let c = catalogue();
        let order: Vec<String> = c
            .combined()
            .iter()
            .map(|p| p.descriptor().to_string())
            .collect();

        assert_eq!(order[0], "combined(SQ+SH)");
        assert_eq!(order[1], "combined(SQ+SHOT)");
        assert_eq!(order[2], "combined(SQ+numeric)");
        assert_eq!(order[9], "combined(letters+SH)");
        assert_eq!(order[14], "combined(numeric+numeric)");
    }

    #[test]
    fn explicit_prefixes_precede_generic_rules() {
        let c = catalogue();
        assert_eq!(
            c.sequence()[0].descriptor().kind,
            PatternKind::Sequence(SequenceForm::Sq)
        );
        assert_eq!(
            c.sequence()[4].descriptor().kind,
            PatternKind::Sequence(SequenceForm::Numeric)
        );
        assert_eq!(
            c.shot()[2].descriptor().kind,
            PatternKind::Shot(ShotForm::Numeric)
        );
    }

    #[test]
    fn combined_capture_both_tokens() {
        let c = catalogue();
        let hit = first_hit(c.combined(), "/ABC01_010/").unwrap();
        assert_eq!(hit.sequence, Some("ABC01"));
        assert_eq!(hit.shot, Some("010"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = catalogue();
        let hit = first_hit(c.sequence(), "/abc01/").unwrap();
        assert_eq!(hit.sequence, Some("abc01"));
        assert_eq!(hit.shot, None);

        let hit = first_hit(c.shot(), "/sh0100/").unwrap();
        assert_eq!(hit.shot, Some("sh0100"));
    }

    #[test]
    fn letter_code_is_three_or_four_letters() {
        let c = catalogue();
        let letters = &c.sequence()[3];
        assert!(letters.find("/ABCD01/").is_some());
        assert!(letters.find("/AB01/").is_none());
        assert!(letters.find("/ABCDE01/").is_none());
    }

    #[test]
    fn bare_numeric_needs_separator() {
        let c = catalogue();
        let numeric_sequence = &c.sequence()[4];
        assert!(numeric_sequence.find("/0100").is_none());
        assert_eq!(
            numeric_sequence.find("/01_").and_then(|h| h.sequence),
            Some("01")
        );

        let numeric_shot = &c.shot()[2];
        assert!(numeric_shot.find("v0100").is_none());
        assert_eq!(numeric_shot.find("-0100").and_then(|h| h.shot), Some("0100"));
    }

    #[test]
    fn special_characters_break_tokens() {
        let c = catalogue();
        assert!(first_hit(c.sequence(), "/SQ@01/").is_none());
        assert!(first_hit(c.shot(), "/SH#010/").is_none());
    }
}
