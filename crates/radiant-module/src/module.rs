//! The [`Module`] trait and [`Stage`] enum.
//!
//! Modules are stateless (or read-only configured) operators run on every
//! active candidate each pass. They never own candidates; they receive one
//! by mutable reference and decide for themselves whether to act.

use std::fmt;

use radiant_core::{Candidate, ModuleError};

/// Ordering bucket of a module within one pass.
///
/// Stages run in ascending order; modules within a stage run in the order
/// they were added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Advance position and direction; propose the next step.
    Propagation,
    /// Sample discrete interactions over the step just taken.
    Interaction,
    /// Check termination conditions and limit the next step.
    BreakCondition,
    /// Externalise candidate state.
    Output,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Propagation,
        Stage::Interaction,
        Stage::BreakCondition,
        Stage::Output,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Propagation => "propagation",
            Self::Interaction => "interaction",
            Self::BreakCondition => "break-condition",
            Self::Output => "output",
        };
        f.write_str(name)
    }
}

/// A processing unit applied to one candidate per pass.
///
/// # Contract
///
/// - `process()` may mutate the candidate's current state, shrink its next
///   step with [`Candidate::limit_next_step`], spawn secondaries, or mark it
///   inactive. Only propagation-stage modules set the next step outright.
/// - `&self`: configuration is read-only during a run. The same module is
///   shared by every worker thread, hence `Send + Sync`.
/// - Modules must not depend on the order in which different candidates are
///   processed. Randomness comes from [`Candidate::rng`].
/// - Inactive candidates are still handed to every module in the pass that
///   deactivated them; a module that should skip them checks
///   [`Candidate::is_active`].
///
/// # Examples
///
/// ```
/// use radiant_core::{Candidate, ModuleError, ParticleState};
/// use radiant_module::Module;
///
/// struct Tag;
///
/// impl Module for Tag {
///     fn name(&self) -> &str { "Tag" }
///
///     fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
///         candidate.set_property("seen", "yes");
///         Ok(())
///     }
/// }
///
/// let mut c = Candidate::new(ParticleState::default());
/// Tag.process(&mut c).unwrap();
/// assert_eq!(c.property("seen"), Some("yes"));
/// ```
pub trait Module: Send + Sync {
    /// Human-readable name for error reporting and chain listings.
    fn name(&self) -> &str;

    /// One-line description of the configuration, shown in chain listings.
    ///
    /// Default: the module name.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// Process one candidate.
    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError>;
}
