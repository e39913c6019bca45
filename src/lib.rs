//! # Random level-order binary tree arrays
//!
//! Generates test input for binary-tree-depth algorithms: a flat
//! breadth-first array of node values where `null` marks a missing child.
//!
//! ## Construction
//!
//! 1. **Root**: slot 0 is always the value 0
//! 2. **Sampling**: each child is drawn from [-110, 110]; draws outside
//!    [-100, 100] become `null`
//! 3. **Level expansion**: every present node of the last level appends
//!    a (left, right) pair, `null` slots append nothing
//! 4. **Limit**: expansion stops the moment the array holds `limit` slots,
//!    possibly mid-level
//!
//! ## Usage Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use treegen::{GeneratorConfig, TreeGenerator};
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut generator = TreeGenerator::new(GeneratorConfig::with_limit(100), rng)?;
//! let array = generator.generate()?;
//! assert!(array.len() >= 100);
//! println!("{}", array);
//! # Ok::<(), treegen::GenerationError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod render; // Array-literal output
pub mod tree; // Node values, sampling, level expansion

pub use render::{render_array, write_array};
pub use tree::{generate_tree_array, NodeSampler, NodeSource, NodeValue, SamplerRange, TreeArray};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

/// Largest accepted limit
pub const MAX_LIMIT: usize = 50_000_000;

/// Limit used when none is given
pub const DEFAULT_LIMIT: usize = 10_000;

/// Fresh trees tried before giving up on a dead frontier
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Configuration parameters for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum number of slots in the output array
    pub limit: usize,

    /// Value range and Absent margin of the sampler
    pub range: SamplerRange,

    /// Attempts before a dead frontier becomes an error
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            range: SamplerRange::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a custom limit
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Reject limits, ranges and attempt counts that cannot produce output
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.limit > MAX_LIMIT {
            return Err(GenerationError::LimitTooLarge {
                limit: self.limit,
                max: MAX_LIMIT,
            });
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::NoAttempts);
        }
        self.range.validate()
    }
}

/// Errors that can occur during generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Requested limit exceeds [`MAX_LIMIT`]
    #[error("Limit {limit} exceeds maximum {max}")]
    LimitTooLarge {
        /// Requested limit
        limit: usize,
        /// Largest accepted limit
        max: usize,
    },

    /// Sampler range is negative or overflows
    #[error("Invalid sampler range: {0}")]
    InvalidRange(String),

    /// `max_attempts` is zero
    #[error("At least one generation attempt is required")]
    NoAttempts,

    /// Every branch ended in `null` before the array reached the limit
    #[error("Frontier exhausted at {len} slots before reaching limit {limit}")]
    FrontierExhausted {
        /// Array length when the last level came up empty
        len: usize,
        /// Requested limit
        limit: usize,
    },
}

/// Generation orchestrator
///
/// Owns the random source so repeated calls continue one stream; seed it
/// for reproducible output.
#[derive(Debug)]
pub struct TreeGenerator<R> {
    config: GeneratorConfig,
    rng: R,
}

impl<R: Rng> TreeGenerator<R> {
    /// Create generator after validating `config`
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one array, retrying on a dead frontier
    ///
    /// Each retry starts a fresh tree from the same random stream. The
    /// last `FrontierExhausted` error is returned once attempts run out.
    pub fn generate(&mut self) -> Result<TreeArray, GenerationError> {
        let mut last_err = GenerationError::NoAttempts;

        for attempt in 1..=self.config.max_attempts {
            match self.generate_once() {
                Ok(array) => {
                    debug!(attempt, len = array.len(), "tree generated");
                    return Ok(array);
                }
                Err(err @ GenerationError::FrontierExhausted { .. }) => {
                    warn!(attempt, error = %err, "tree died out, retrying");
                    last_err = err;
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_err)
    }

    /// Generate one array without retrying
    pub fn generate_once(&mut self) -> Result<TreeArray, GenerationError> {
        let mut sampler = NodeSampler::with_range(&mut self.rng, self.config.range)?;
        let (array, report) = TreeArray::build(self.config.limit, &mut sampler)?;
        debug!(
            limit = self.config.limit,
            len = array.len(),
            levels = report.levels,
            truncated = report.truncated,
            "levels expanded"
        );
        Ok(array)
    }
}
