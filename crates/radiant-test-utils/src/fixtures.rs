//! Reusable module test fixtures.
//!
//! - [`ConstantStep`]: propagates by a fixed step along the direction.
//! - [`CountingModule`]: counts calls, does nothing else.
//! - [`FailingModule`]: fails deterministically after N calls.
//! - [`SpawnOnce`]: spawns one secondary from each primary.

use std::sync::atomic::{AtomicUsize, Ordering};

use radiant_core::{Candidate, ModuleError};
use radiant_module::Module;

/// Moves the candidate `step` metres along its direction and proposes the
/// same step again.
pub struct ConstantStep {
    pub step: f64,
}

impl ConstantStep {
    pub fn new(step: f64) -> Self {
        Self { step }
    }
}

impl Module for ConstantStep {
    fn name(&self) -> &str {
        "ConstantStep"
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        let step = if candidate.next_step() > 0.0 {
            candidate.next_step().min(self.step)
        } else {
            self.step
        };
        candidate.previous = candidate.current.clone();
        let position = candidate.current.position() + candidate.current.direction() * step;
        candidate.current.set_position(position)?;
        candidate.set_current_step(step);
        candidate.set_next_step(self.step);
        Ok(())
    }
}

/// Counts how many candidates it has processed.
///
/// Uses `AtomicUsize` so it can be shared across worker threads.
pub struct CountingModule {
    pub name: String,
    calls: AtomicUsize,
}

impl CountingModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `process()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Module for CountingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _candidate: &mut Candidate) -> Result<(), ModuleError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Fails deterministically after a configurable number of successful calls.
pub struct FailingModule {
    pub name: String,
    pub succeed_count: usize,
    calls: AtomicUsize,
}

impl FailingModule {
    /// Create a module that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `process()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Module for FailingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _candidate: &mut Candidate) -> Result<(), ModuleError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(ModuleError::ExecutionFailed {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        Ok(())
    }
}

/// Spawns a copy of each primary's current state as a secondary, once.
///
/// Secondaries themselves never spawn.
pub struct SpawnOnce;

/// Property set on a primary after it has spawned.
pub const SPAWNED: &str = "SpawnOnce";

impl Module for SpawnOnce {
    fn name(&self) -> &str {
        "SpawnOnce"
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        if candidate.parent().is_some() || candidate.property(SPAWNED).is_some() {
            return Ok(());
        }
        let state = candidate.current.clone();
        candidate.add_secondary(state);
        candidate.set_property(SPAWNED, "yes");
        Ok(())
    }
}
