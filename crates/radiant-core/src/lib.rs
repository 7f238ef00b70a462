//! Core types for the Radiant particle propagation framework.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! per-particle data model shared by every other crate in the workspace:
//! [`ParticleState`] snapshots, the [`Candidate`] work unit with its owned
//! secondaries, particle-id helpers, unit constants, the
//! [`MagneticField`] capability, and the error types of each subsystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod id;
pub mod paths;
pub mod state;
pub mod traits;
pub mod units;

pub use candidate::{Candidate, CandidateStatus};
pub use error::{ModuleError, StateError, StepError};
pub use id::{charge_number, is_nucleus, mass_number, nucleus_id, CandidateId};
pub use paths::DataPaths;
pub use state::ParticleState;
pub use traits::MagneticField;

/// Three-component vector used for positions, directions, and fields.
pub type Vector3 = nalgebra::Vector3<f64>;
