/// Configuration for the token engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Whether `get_sequence_and_shot` memoizes results
    pub cache: bool,
    /// Number of distinct paths the cache is pre-sized for
    pub initial_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache: true,
            initial_capacity: 0,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable result memoization.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Pre-size the cache, e.g. to the number of entries a directory scan
    /// is expected to produce.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
