//! Simulation configuration and its validation.

use std::error::Error;
use std::fmt;

use radiant_module::{ChainError, ModuleChain};

/// Default cap on the number of passes per run.
pub const DEFAULT_MAX_PASSES: u64 = 1_000_000;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Module chain validation failed.
    Chain(ChainError),
    /// `max_passes` is zero.
    ZeroPasses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(e) => write!(f, "chain: {e}"),
            Self::ZeroPasses => write!(f, "max_passes must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chain(e) => Some(e),
            Self::ZeroPasses => None,
        }
    }
}

impl From<ChainError> for ConfigError {
    fn from(e: ChainError) -> Self {
        Self::Chain(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
pub struct SimulationConfig {
    /// Modules run on every active candidate each pass.
    pub chain: ModuleChain,
    /// Stop after this many passes even if candidates remain active.
    /// Default: [`DEFAULT_MAX_PASSES`].
    pub max_passes: u64,
    /// Process candidates on the rayon pool. Default: `true`.
    pub parallel: bool,
    /// Root seed for primary candidates' random streams. Default: 0.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            chain: ModuleChain::new(),
            max_passes: DEFAULT_MAX_PASSES,
            parallel: true,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Configuration around `chain` with default settings.
    pub fn new(chain: ModuleChain) -> Self {
        Self {
            chain,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Chain`] for an empty or unpropagated chain,
    /// [`ConfigError::ZeroPasses`] if `max_passes` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chain.validate()?;
        if self.max_passes == 0 {
            return Err(ConfigError::ZeroPasses);
        }
        Ok(())
    }
}

impl fmt::Debug for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationConfig")
            .field("chain", &self.chain)
            .field("max_passes", &self.max_passes)
            .field("parallel", &self.parallel)
            .field("seed", &self.seed)
            .finish()
    }
}
