//! Error types shared across the Radiant workspace.
//!
//! Organised by where the failure is detected: assignment into a
//! [`ParticleState`](crate::ParticleState) ([`StateError`]), a single
//! module processing a candidate ([`ModuleError`]), and the chain wrapping
//! that failure with the module and candidate it came from ([`StepError`]).

use std::error::Error;
use std::fmt;

use crate::id::CandidateId;

/// A degenerate value was rejected at the point of assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum StateError {
    /// Direction vector is zero-length or contains non-finite components.
    InvalidDirection {
        /// Euclidean norm of the rejected vector.
        norm: f64,
    },
    /// Energy is non-finite or not strictly positive.
    InvalidEnergy {
        /// The rejected energy \[J\].
        value: f64,
    },
    /// Position contains non-finite components.
    InvalidPosition,
    /// Frequency is non-finite or not strictly positive.
    InvalidFrequency {
        /// The rejected frequency \[Hz\].
        value: f64,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { norm } => {
                write!(f, "direction must be finite and non-zero, got norm {norm}")
            }
            Self::InvalidEnergy { value } => {
                write!(f, "energy must be finite and positive, got {value}")
            }
            Self::InvalidPosition => write!(f, "position must be finite"),
            Self::InvalidFrequency { value } => {
                write!(f, "frequency must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for StateError {}

/// Errors raised by a module while processing one candidate.
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleError {
    /// The candidate's state cannot be processed by this module.
    InvalidState(StateError),
    /// A charged particle reached the propagator without a usable energy.
    MissingEnergy {
        /// The energy found on the candidate \[J\].
        energy: f64,
    },
    /// Integration produced a non-finite position or direction.
    NonFiniteState,
    /// Catch-all for module-specific failures.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(e) => write!(f, "invalid state: {e}"),
            Self::MissingEnergy { energy } => {
                write!(f, "charged particle requires positive energy, got {energy}")
            }
            Self::NonFiniteState => write!(f, "integration produced a non-finite state"),
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for ModuleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidState(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StateError> for ModuleError {
    fn from(e: StateError) -> Self {
        Self::InvalidState(e)
    }
}

/// A module failed while the chain was processing a candidate.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The named module returned an error for the given candidate.
    ModuleFailed {
        /// Name of the failing module.
        module: String,
        /// The candidate being processed.
        candidate: CandidateId,
        /// The underlying module error.
        reason: ModuleError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModuleFailed {
                module,
                candidate,
                reason,
            } => write!(f, "module '{module}' failed on candidate {candidate}: {reason}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModuleFailed { reason, .. } => Some(reason),
        }
    }
}
