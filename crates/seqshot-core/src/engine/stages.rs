//! The three matching stages, in the order the engine runs them.

use tracing::trace;

use crate::catalogue::{Catalogue, CompiledPattern, TokenCapture};
use crate::types::SeqShot;

/// Splits `path` on `/` and re-wraps every piece as `/piece/`, so each
/// pattern sees slash boundaries wherever the piece sat in the path.
///
/// Empty pieces are kept (`"a//b"` yields `/a/`, `//`, `/b/`).
pub(crate) fn segments(path: &str) -> Vec<String> {
    path.split('/').map(|part| format!("/{part}/")).collect()
}

/// Stage A: combined patterns against the whole path.
pub(crate) fn whole_path(catalogue: &Catalogue, path: &str) -> Option<SeqShot> {
    first_combined(catalogue.combined(), path).inspect(|result| {
        trace!(path, %result, "whole-path combined match");
    })
}

/// Stage B: combined patterns against each segment, segment order first.
pub(crate) fn per_segment(catalogue: &Catalogue, segments: &[String]) -> Option<SeqShot> {
    segments.iter().find_map(|segment| {
        first_combined(catalogue.combined(), segment).inspect(|result| {
            trace!(segment = segment.as_str(), %result, "segment combined match");
        })
    })
}

/// Stage C: sequence and shot resolved independently, possibly from
/// different segments.
pub(crate) fn independent(catalogue: &Catalogue, segments: &[String]) -> SeqShot {
    let mut result = SeqShot::none();

    for segment in segments {
        if result.sequence.is_none() {
            result.sequence = first_label(catalogue.sequence(), segment, |c| c.sequence);
        }
        if result.shot.is_none() {
            result.shot = first_label(catalogue.shot(), segment, |c| c.shot);
        }
        if result.is_complete() {
            break;
        }
    }

    if !result.is_empty() {
        trace!(%result, "independent match");
    }
    result
}

fn first_combined(patterns: &[CompiledPattern], haystack: &str) -> Option<SeqShot> {
    patterns.iter().find_map(|pattern| {
        pattern.find(haystack).map(|capture| {
            SeqShot::new(
                capture.sequence.map(str::to_owned),
                capture.shot.map(str::to_owned),
            )
        })
    })
}

fn first_label<F>(patterns: &[CompiledPattern], haystack: &str, pick: F) -> Option<String>
where
    F: Fn(TokenCapture<'_>) -> Option<&str>,
{
    patterns
        .iter()
        .find_map(|pattern| pattern.find(haystack).and_then(&pick))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    #[test]
    fn segments_are_rewrapped() {
        assert_eq!(segments("/a/b.ma"), vec!["//", "/a/", "/b.ma/"]);
        assert_eq!(segments(""), vec!["//"]);
        assert_eq!(segments("a//b"), vec!["/a/", "//", "/b/"]);
    }

    #[test]
    fn whole_path_needs_slash_bounds() {
        let c = catalogue();
        assert!(whole_path(&c, "/show/SQ01_SH010").is_none());
        assert_eq!(
            whole_path(&c, "/show/SQ01_SH010/"),
            Some(SeqShot::new(Some("SQ01".into()), Some("SH010".into())))
        );
    }

    #[test]
    fn per_segment_recovers_unbounded_tail() {
        let c = catalogue();
        let segs = segments("/show/SQ01_SH010");
        assert_eq!(
            per_segment(&c, &segs),
            Some(SeqShot::new(Some("SQ01".into()), Some("SH010".into())))
        );
    }

    #[test]
    fn independent_mixes_segments() {
        let c = catalogue();
        let segs = segments("/show/SQ01/renders/0100_v001.exr");
        assert_eq!(
            independent(&c, &segs),
            SeqShot::new(Some("SQ01".into()), Some("0100".into()))
        );
    }

    #[test]
    fn independent_finds_nothing() {
        let c = catalogue();
        let segs = segments("/projects/production/assets/character.ma");
        assert!(independent(&c, &segs).is_empty());
    }
}
