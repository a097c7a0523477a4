//! Parallelism configuration for issue classification.
//!
//! Classification is a pure per-finding function, so it can fan out across
//! rayon's thread pool. Results are always collected in input order.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Default minimum number of findings before going parallel
fn default_min_batch() -> usize {
    64
}

/// Configuration for parallel classification.
///
/// # Example
///
/// ```rust
/// use shipgate::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     min_batch: 16,
/// };
/// assert!(config.should_parallelize(20));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    ///
    /// When disabled, findings are classified sequentially.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Smallest finding count worth spreading over the thread pool (default: 64)
    #[serde(default = "default_min_batch")]
    pub min_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            min_batch: default_min_batch(),
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn should_parallelize(&self, item_count: usize) -> bool {
        self.enabled && item_count >= self.min_batch.max(1)
    }
}
