//! # Seqshot Core
//!
//! Recognizes sequence and shot identifiers embedded in production asset
//! paths, e.g. `/show/SQ01/SH010/asset.ma` gives sequence `SQ01` and shot
//! `SH010`. A fixed, priority-ordered pattern catalogue is applied in three
//! stages and results are memoized per path.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqshot_core::Engine;
//!
//! let engine = Engine::with_defaults().unwrap();
//! let result = engine.get_sequence_and_shot("/projects/production/ABC01_010/assets/character.ma");
//!
//! assert_eq!(result.as_tuple(), (Some("ABC01"), Some("010")));
//! ```
pub mod cache;
pub mod catalogue;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod types;

// Re-export primary API
pub use cache::{CacheStats, ResultCache};
pub use catalogue::{Catalogue, PatternDescriptor, PatternKind, SequenceForm, ShotForm};
pub use engine::{Engine, EngineConfig};
pub use error::{Result, SeqShotError};
pub use grouping::{SequenceTree, TokenFilter, group_by_sequence};
pub use types::{Annotated, SeqShot};
