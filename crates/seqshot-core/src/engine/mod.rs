//! # Token Engine
//!
//! Applies the pattern catalogue to a path in three stages and returns the
//! first consistent result:
//!
//! 1. combined patterns against the whole path,
//! 2. combined patterns against each slash-wrapped segment,
//! 3. sequence-only and shot-only patterns resolved independently.
//!
//! A combined match (stage 1 or 2) always wins over independent resolution.

pub mod config;
mod stages;

use tracing::debug;

use crate::cache::{CacheStats, ResultCache};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::types::{Annotated, SeqShot};

pub use config::EngineConfig;

/// Sequence/shot extraction engine with an owned result cache.
///
/// Build one per project session and share it by reference (or `Arc`)
/// between scan workers and views. Call [`Engine::clear_cache`] when the
/// working set changes, e.g. when switching project roots.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    catalogue: Catalogue,
    cache: ResultCache,
}

impl Engine {
    /// Create a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SeqShotError::Pattern` if the catalogue fails to compile
    /// (should never happen with the fixed catalogue).
    pub fn new(config: EngineConfig) -> Result<Self> {
        let catalogue = Catalogue::new()?;
        let cache = ResultCache::with_capacity(config.initial_capacity);

        debug!(
            combined = catalogue.combined().len(),
            sequence = catalogue.sequence().len(),
            shot = catalogue.shot().len(),
            cache = config.cache,
            "seqshot engine ready"
        );

        Ok(Self {
            config,
            catalogue,
            cache,
        })
    }

    /// Create a new engine with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Extracts sequence and shot labels from `path`, serving repeated paths
    /// from the cache.
    ///
    /// # Examples
    /// ```
    /// use seqshot_core::Engine;
    ///
    /// let engine = Engine::with_defaults().unwrap();
    /// let result = engine.get_sequence_and_shot("/projects/production/SQ01/SH010/assets/character.ma");
    ///
    /// assert_eq!(result.sequence.as_deref(), Some("SQ01"));
    /// assert_eq!(result.shot.as_deref(), Some("SH010"));
    /// ```
    pub fn get_sequence_and_shot(&self, path: &str) -> SeqShot {
        if self.config.cache {
            self.cache
                .get_or_compute(path, |path| self.match_path(path))
        } else {
            self.match_path(path)
        }
    }

    /// Runs the staged matcher without touching the cache.
    pub fn match_path(&self, path: &str) -> SeqShot {
        if let Some(result) = stages::whole_path(&self.catalogue, path) {
            return result;
        }

        let segments = stages::segments(path);
        if let Some(result) = stages::per_segment(&self.catalogue, &segments) {
            return result;
        }

        stages::independent(&self.catalogue, &segments)
    }

    /// Annotates every path with its labels, keeping input order.
    pub fn annotate<I, S>(&self, paths: I) -> Vec<Annotated>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| {
                let path = path.as_ref();
                Annotated::new(path, self.get_sequence_and_shot(path))
            })
            .collect()
    }

    /// Drops every cached result. Returns the number of entries removed.
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.clear();
        debug!(removed, "seqshot cache cleared");
        removed
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
