//! Staged module chain and its validation.
//!
//! [`ModuleChain`] keeps modules sorted by [`Stage`], preserving insertion
//! order inside a stage. [`ModuleChain::process`] runs one full pass of the
//! chain over a single candidate; driving passes until candidates terminate
//! is the simulation driver's job.

use std::error::Error;
use std::fmt;

use radiant_core::{Candidate, StepError};

use crate::module::{Module, Stage};

// ── Errors ─────────────────────────────────────────────────────────

/// Structural errors detected by [`ModuleChain::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// No modules registered.
    Empty,
    /// No module in [`Stage::Propagation`]; candidates would never move.
    NoPropagation,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "module chain has no modules"),
            Self::NoPropagation => write!(f, "module chain has no propagation-stage module"),
        }
    }
}

impl Error for ChainError {}

// ── ModuleChain ────────────────────────────────────────────────────

/// An ordered collection of modules grouped into stages.
#[derive(Default)]
pub struct ModuleChain {
    modules: Vec<(Stage, Box<dyn Module>)>,
}

impl ModuleChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module to `stage`, after any module already in that stage.
    pub fn add(&mut self, stage: Stage, module: Box<dyn Module>) -> &mut Self {
        let at = self.modules.partition_point(|(s, _)| *s <= stage);
        self.modules.insert(at, (stage, module));
        self
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, stage: Stage, module: impl Module + 'static) -> Self {
        self.add(stage, Box::new(module));
        self
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the chain has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &dyn Module)> {
        self.modules.iter().map(|(s, m)| (*s, m.as_ref()))
    }

    /// Module names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|(_, m)| m.name()).collect()
    }

    /// Check the chain for structural errors.
    ///
    /// # Errors
    ///
    /// [`ChainError::Empty`] for an empty chain,
    /// [`ChainError::NoPropagation`] if no module sits in
    /// [`Stage::Propagation`].
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.modules.is_empty() {
            return Err(ChainError::Empty);
        }
        if !self.modules.iter().any(|(s, _)| *s == Stage::Propagation) {
            return Err(ChainError::NoPropagation);
        }
        Ok(())
    }

    /// Run every module once on `candidate`, in stage order.
    ///
    /// Stops at the first failing module.
    ///
    /// # Errors
    ///
    /// [`StepError::ModuleFailed`] naming the module and candidate.
    pub fn process(&self, candidate: &mut Candidate) -> Result<(), StepError> {
        for (_, module) in &self.modules {
            module
                .process(candidate)
                .map_err(|reason| StepError::ModuleFailed {
                    module: module.name().to_string(),
                    candidate: candidate.id(),
                    reason,
                })?;
        }
        Ok(())
    }
}

impl fmt::Display for ModuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ModuleChain ({} modules)", self.modules.len())?;
        for (stage, module) in &self.modules {
            writeln!(f, "  [{stage}] {}", module.description())?;
        }
        Ok(())
    }
}

impl fmt::Debug for ModuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleChain")
            .field("modules", &self.names())
            .finish()
    }
}
