//! The pass loop.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use radiant_core::{Candidate, CandidateId, ParticleState, StepError};

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::{PassMetrics, RunMetrics};

// ── Error type ─────────────────────────────────────────────────────

/// Errors that abort a run.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// A module failed on a candidate.
    Step(StepError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(e) => write!(f, "simulation aborted: {e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Step(e) => Some(e),
        }
    }
}

impl From<StepError> for SimulationError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

// ── RunReport ──────────────────────────────────────────────────────

/// Outcome of [`Simulation::run`].
#[derive(Debug)]
pub struct RunReport {
    /// Inactive candidates, in retirement order.
    pub finished: Vec<Candidate>,
    /// Candidates still active when the pass cap was reached.
    pub unfinished: Vec<Candidate>,
    /// Per-pass counters.
    pub passes: Vec<PassMetrics>,
    /// Totals.
    pub metrics: RunMetrics,
}

impl RunReport {
    /// Whether every candidate reached an inactive state.
    pub fn is_complete(&self) -> bool {
        self.unfinished.is_empty()
    }
}

// ── Simulation ─────────────────────────────────────────────────────

/// Drives candidates through a module chain.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Validate `config` and wrap it.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Primary candidate number `index` of this simulation.
    ///
    /// Its seed is derived from the configured root seed and `index`, so
    /// primaries have independent, reproducible streams.
    pub fn primary(&self, state: ParticleState, index: u64) -> Candidate {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream(index);
        Candidate::with_seed(state, rng.next_u64())
    }

    /// Run `candidates` until every one is inactive or the pass cap is hit.
    ///
    /// Candidates are given sequential ids in input order; secondaries
    /// continue the sequence as they are merged. Candidates that are
    /// already inactive go straight to [`RunReport::finished`].
    ///
    /// # Errors
    ///
    /// [`SimulationError::Step`] naming the first failing module and
    /// candidate. With `parallel` set, which failure is reported first is
    /// unspecified if several candidates fail in the same pass.
    pub fn run(&self, candidates: Vec<Candidate>) -> Result<RunReport, SimulationError> {
        let started = Instant::now();
        let mut next_id = 0u64;
        let mut active = Vec::with_capacity(candidates.len());
        let mut finished = Vec::new();
        for mut candidate in candidates {
            candidate.assign_id(CandidateId(next_id));
            next_id += 1;
            if candidate.is_active() {
                active.push(candidate);
            } else {
                finished.push(candidate);
            }
        }

        log::info!(
            "run started: {} candidates, {} modules, parallel={}",
            active.len(),
            self.config.chain.len(),
            self.config.parallel
        );

        let mut passes = Vec::new();
        let mut metrics = RunMetrics::default();
        let mut pass = 0u64;
        while !active.is_empty() && pass < self.config.max_passes {
            let pass_start = Instant::now();
            let processed = active.len();
            self.process_pass(&mut active)?;

            // Pass boundary: merge secondaries, retire inactive candidates.
            let mut spawned = Vec::new();
            for parent in &mut active {
                for mut child in parent.take_secondaries() {
                    child.assign_id(CandidateId(next_id));
                    next_id += 1;
                    spawned.push(child);
                }
            }
            let spawned_count = spawned.len();
            let before = finished.len();
            let (still_active, retired): (Vec<_>, Vec<_>) = active
                .into_iter()
                .chain(spawned)
                .partition(Candidate::is_active);
            active = still_active;
            finished.extend(retired);

            let pass_metrics = PassMetrics {
                pass,
                active: processed,
                spawned: spawned_count,
                retired: finished.len() - before,
                elapsed_us: pass_start.elapsed().as_micros() as u64,
            };
            log::debug!(
                "pass {}: {} processed, {} spawned, {} retired, {} active",
                pass,
                processed,
                pass_metrics.spawned,
                pass_metrics.retired,
                active.len()
            );
            metrics.record(&pass_metrics);
            passes.push(pass_metrics);
            pass += 1;
        }

        if !active.is_empty() {
            log::warn!(
                "pass cap of {} reached with {} candidates still active",
                self.config.max_passes,
                active.len()
            );
        }
        log::info!(
            "run finished: {} passes, {} finished, {} unfinished, {} spawned in {:?}",
            metrics.passes,
            finished.len(),
            active.len(),
            metrics.spawned,
            started.elapsed()
        );

        Ok(RunReport {
            finished,
            unfinished: active,
            passes,
            metrics,
        })
    }

    fn process_pass(&self, active: &mut [Candidate]) -> Result<(), StepError> {
        let chain = &self.config.chain;
        if self.config.parallel {
            active
                .par_iter_mut()
                .try_for_each(|candidate| chain.process(candidate))
        } else {
            active
                .iter_mut()
                .try_for_each(|candidate| chain.process(candidate))
        }
    }
}
