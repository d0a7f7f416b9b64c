//! Validated traversal settings shared by the library, the CLI and the WASM
//! surface.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can stay declarative.

use std::fmt;

use crate::constants::{DEFAULT_SEED_EDGE, MAX_TRAVERSAL_STEPS};

/// Settings for one region-growing run.
///
/// # Examples
/// ```
/// use config::traversal::HexagonifyConfig;
/// let config = HexagonifyConfig::default();
/// assert_eq!(config.max_steps, 100_000);
/// assert_eq!(config.seed_edge, (0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagonifyConfig {
    /// Upper bound on queue pops before the run is reported as truncated.
    pub max_steps: usize,
    /// Vertex indices of the edge the traversal starts from.
    pub seed_edge: (usize, usize),
}

impl HexagonifyConfig {
    /// Builds a configuration, rejecting a zero step budget and a seed edge
    /// whose endpoints coincide.
    ///
    /// # Examples
    /// ```
    /// use config::traversal::HexagonifyConfig;
    /// let cfg = HexagonifyConfig::new(500, (3, 4)).expect("valid config");
    /// assert_eq!(cfg.max_steps, 500);
    /// ```
    pub fn new(max_steps: usize, seed_edge: (usize, usize)) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        if seed_edge.0 == seed_edge.1 {
            return Err(ConfigError::DegenerateSeedEdge(seed_edge.0));
        }
        Ok(Self {
            max_steps,
            seed_edge,
        })
    }

    /// Returns a copy with a different step budget.
    ///
    /// # Examples
    /// ```
    /// use config::traversal::HexagonifyConfig;
    /// let cfg = HexagonifyConfig::default().with_max_steps(10).unwrap();
    /// assert_eq!(cfg.max_steps, 10);
    /// ```
    pub fn with_max_steps(self, max_steps: usize) -> Result<Self, ConfigError> {
        Self::new(max_steps, self.seed_edge)
    }
}

impl Default for HexagonifyConfig {
    fn default() -> Self {
        Self {
            max_steps: MAX_TRAVERSAL_STEPS,
            seed_edge: DEFAULT_SEED_EDGE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the step budget is zero.
    ZeroStepBudget,
    /// Raised when both seed edge endpoints are the same vertex index.
    DegenerateSeedEdge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroStepBudget => write!(f, "max_steps must be at least 1"),
            ConfigError::DegenerateSeedEdge(index) => {
                write!(f, "seed edge endpoints must differ: both are {index}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
