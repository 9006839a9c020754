//! # Seqshot
//!
//! Sequence and shot extraction for production asset paths. This crate
//! re-exports the engine from [`seqshot_core`].
//!
//! ```rust
//! let engine = seqshot::Engine::with_defaults().unwrap();
//! let (sequence, shot) = engine
//!     .get_sequence_and_shot("/projects/production/SEQ01/SH01000/assets/character.ma")
//!     .into_tuple();
//!
//! assert_eq!(sequence.as_deref(), Some("SEQ01"));
//! assert_eq!(shot.as_deref(), Some("SH01000"));
//! ```

pub use seqshot_core::*;
