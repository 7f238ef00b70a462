//! Radiant: modular Monte-Carlo propagation of cosmic-ray nuclei.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Radiant sub-crates. For most users, adding `radiant` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use radiant::prelude::*;
//! use radiant::units::MPC;
//!
//! let chain = ModuleChain::new()
//!     .with(
//!         Stage::Propagation,
//!         SimplePropagation::new(0.0, 1.0 * MPC).unwrap(),
//!     )
//!     .with(
//!         Stage::BreakCondition,
//!         MaximumTrajectoryLength::new(4.0 * MPC).unwrap(),
//!     );
//! let mut config = SimulationConfig::new(chain);
//! config.seed = 42;
//! let sim = Simulation::new(config).unwrap();
//!
//! let state = ParticleState::new(
//!     nucleus_id(1, 1),
//!     1e18 * radiant::units::EV,
//!     Vector3::zeros(),
//!     Vector3::new(1.0, 0.0, 0.0),
//! )
//! .unwrap();
//! let report = sim.run(vec![sim.primary(state, 0)]).unwrap();
//! assert!(report.is_complete());
//! assert!(report.finished[0].trajectory_length() >= 4.0 * MPC);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `radiant-core` | Particle states, candidates, ids, errors |
//! | [`units`] | `radiant-core` | SI unit constants |
//! | [`interp`] | `radiant-interp` | Interpolation and interaction tables |
//! | [`module`] | `radiant-module` | Module trait, stages, and the module chain |
//! | [`modules`] | `radiant-modules` | Propagators, interactions, break conditions |
//! | [`engine`] | `radiant-engine` | Pass loop, configuration, run metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids, and errors (`radiant-core`).
///
/// Contains [`types::ParticleState`], the [`types::Candidate`] work unit,
/// and the [`types::MagneticField`] capability.
pub use radiant_core as types;

/// SI unit constants (`radiant-core`).
pub use radiant_core::units;

/// Interpolation primitives and interaction tables (`radiant-interp`).
pub use radiant_interp as interp;

/// Module trait and ordered module chain (`radiant-module`).
///
/// The [`module::Module`] trait is the main extension point for
/// user-defined physics.
pub use radiant_module as module;

/// Reference modules (`radiant-modules`).
///
/// Includes [`modules::PropagationCK`], [`modules::SimplePropagation`],
/// [`modules::ElasticScattering`], and the break conditions.
pub use radiant_modules as modules;

/// The simulation pass loop (`radiant-engine`).
pub use radiant_engine as engine;

/// Common imports for typical Radiant usage.
///
/// ```rust
/// use radiant::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use radiant_core::{
        nucleus_id, Candidate, CandidateId, DataPaths, MagneticField, ParticleState, Vector3,
    };

    // Errors
    pub use radiant_core::{ModuleError, StateError, StepError};

    // Module chain
    pub use radiant_module::{Module, ModuleChain, Stage};

    // Reference modules
    pub use radiant_modules::{
        ElasticScattering, MaximumTrajectoryLength, MinimumEnergy, PhotonField, PropagationCK,
        SimplePropagation, TrajectoryObserver, UniformMagneticField,
    };

    // Engine
    pub use radiant_engine::{RunReport, Simulation, SimulationConfig};
}
