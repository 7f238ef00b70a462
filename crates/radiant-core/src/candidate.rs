//! The [`Candidate`]: one particle's trajectory-processing record.
//!
//! A candidate carries four [`ParticleState`] snapshots, step-size
//! bookkeeping, a terminal flag, an insertion-ordered property map, the
//! secondaries it has spawned, and its own random stream.
//!
//! # Ownership of secondaries
//!
//! Secondaries are owned by their parent until the simulation driver moves
//! them into the active set with [`Candidate::take_secondaries`] at the end
//! of a pass. There are no back-references from a secondary to its parent
//! other than the parent's [`CandidateId`].
//!
//! # Randomness
//!
//! Each candidate owns a `ChaCha8Rng` seeded from its lineage seed. A
//! secondary's seed is drawn from the parent stream at the moment it is
//! spawned, so every decision along a lineage is reproducible for a fixed
//! primary seed regardless of which worker processes which candidate.

use indexmap::IndexMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::id::CandidateId;
use crate::state::ParticleState;

/// Property key set by [`Candidate::deactivate`].
pub const DEACTIVATED: &str = "Deactivated";

/// Whether a candidate is still processed by the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateStatus {
    /// Processed on every pass.
    Active,
    /// Terminal; retired from the active set at the next pass boundary.
    Inactive,
}

/// The unit of work flowing through a module chain.
#[derive(Clone, Debug)]
pub struct Candidate {
    id: CandidateId,
    parent: Option<CandidateId>,
    initial: ParticleState,
    /// State before the last step.
    pub previous: ParticleState,
    /// State after the last step.
    pub current: ParticleState,
    /// State at which this candidate was generated.
    ///
    /// Equal to the initial state for primaries and to the parent's
    /// current state for secondaries.
    pub created: ParticleState,
    current_step: f64,
    next_step: f64,
    trajectory_length: f64,
    status: CandidateStatus,
    properties: IndexMap<String, String>,
    secondaries: Vec<Candidate>,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Candidate {
    /// Create an active candidate with lineage seed 0.
    pub fn new(state: ParticleState) -> Self {
        Self::with_seed(state, 0)
    }

    /// Create an active candidate with an explicit lineage seed.
    pub fn with_seed(state: ParticleState, seed: u64) -> Self {
        Self {
            id: CandidateId::default(),
            parent: None,
            initial: state.clone(),
            previous: state.clone(),
            created: state.clone(),
            current: state,
            current_step: 0.0,
            next_step: 0.0,
            trajectory_length: 0.0,
            status: CandidateStatus::Active,
            properties: IndexMap::new(),
            secondaries: Vec::new(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Identifier assigned by the simulation driver.
    pub fn id(&self) -> CandidateId {
        self.id
    }

    /// Assign the run-local identifier.
    ///
    /// Called by the driver when the candidate enters the active set.
    pub fn assign_id(&mut self, id: CandidateId) {
        self.id = id;
    }

    /// The candidate that spawned this one, if any.
    pub fn parent(&self) -> Option<CandidateId> {
        self.parent
    }

    /// State at creation; never mutated afterwards.
    pub fn initial(&self) -> &ParticleState {
        &self.initial
    }

    /// Lineage seed this candidate's random stream was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// This candidate's random stream.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Length of the step just taken \[m\].
    pub fn current_step(&self) -> f64 {
        self.current_step
    }

    /// Record the step just taken and add it to the trajectory length.
    pub fn set_current_step(&mut self, step: f64) {
        debug_assert!(step >= 0.0, "negative step {step}");
        self.current_step = step;
        self.trajectory_length += step;
    }

    /// Proposed length of the next step \[m\].
    pub fn next_step(&self) -> f64 {
        self.next_step
    }

    /// Overwrite the proposed next step. Negative values are stored as 0.
    pub fn set_next_step(&mut self, step: f64) {
        self.next_step = step.max(0.0);
    }

    /// Shrink the proposed next step to at most `step`; never grows it.
    pub fn limit_next_step(&mut self, step: f64) {
        self.next_step = self.next_step.min(step.max(0.0));
    }

    /// Total path length travelled so far \[m\].
    pub fn trajectory_length(&self) -> f64 {
        self.trajectory_length
    }

    /// Overwrite the travelled path length.
    pub fn set_trajectory_length(&mut self, length: f64) {
        self.trajectory_length = length;
    }

    /// Current status.
    pub fn status(&self) -> CandidateStatus {
        self.status
    }

    /// Whether the chain still processes this candidate.
    pub fn is_active(&self) -> bool {
        self.status == CandidateStatus::Active
    }

    /// Mark the candidate terminal, recording `reason` under
    /// [`DEACTIVATED`].
    pub fn deactivate(&mut self, reason: impl Into<String>) {
        self.status = CandidateStatus::Inactive;
        self.properties.insert(DEACTIVATED.to_string(), reason.into());
    }

    /// Set a free-form property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Look up a property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties in insertion order.
    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    /// Spawn a secondary starting at `state`.
    ///
    /// The secondary inherits this candidate's trajectory length, records
    /// this candidate's current state as its creation point, and seeds its
    /// random stream from this candidate's stream.
    pub fn add_secondary(&mut self, state: ParticleState) -> &mut Candidate {
        let seed = self.rng.next_u64();
        let mut child = Candidate::with_seed(state, seed);
        child.parent = Some(self.id);
        child.created = self.current.clone();
        child.trajectory_length = self.trajectory_length;
        let index = self.secondaries.len();
        self.secondaries.push(child);
        &mut self.secondaries[index]
    }

    /// Secondaries spawned and not yet extracted.
    pub fn secondaries(&self) -> &[Candidate] {
        &self.secondaries
    }

    /// Move all pending secondaries out of this candidate.
    pub fn take_secondaries(&mut self) -> Vec<Candidate> {
        std::mem::take(&mut self.secondaries)
    }
}
