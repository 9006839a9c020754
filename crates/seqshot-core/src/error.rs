use thiserror::Error;

/// Errors that can occur while building a seqshot engine.
///
/// Matching itself never fails: a path without tokens simply yields
/// `None` labels. Only compiling the pattern catalogue is fallible.
#[derive(Debug, Error)]
pub enum SeqShotError {
    /// A catalogue pattern failed to compile (should not happen with the
    /// fixed catalogue).
    #[error("failed to compile pattern {pattern}: {source}")]
    Pattern {
        /// Human-readable name of the offending descriptor.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for seqshot operations.
pub type Result<T> = std::result::Result<T, SeqShotError>;
