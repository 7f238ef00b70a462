//! Physics modules for Radiant module chains.
//!
//! | Module | Stage | Effect |
//! |--------|-------|--------|
//! | [`PropagationCK`] | propagation | adaptive Cash–Karp integration of the Lorentz force |
//! | [`SimplePropagation`] | propagation | rectilinear motion |
//! | [`ElasticScattering`] | interaction | elastic scattering of background photons on nuclei |
//! | [`MaximumTrajectoryLength`] | break-condition | stop after a path length |
//! | [`MinimumEnergy`] | break-condition | stop below an energy |
//! | [`TrajectoryObserver`] | output | record candidate snapshots |
//!
//! Magnetic field models live in [`fields`]; table file readers in
//! [`tables`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod break_condition;
pub mod config;
pub mod elastic_scattering;
pub mod fields;
pub mod observer;
pub mod propagation_ck;
pub mod simple_propagation;
pub mod tables;

pub use break_condition::{MaximumTrajectoryLength, MinimumEnergy};
pub use config::ConfigError;
pub use elastic_scattering::{ElasticScattering, InteractionTables, PhotonField};
pub use fields::{MagneticFieldList, UniformMagneticField};
pub use observer::{TrajectoryObserver, TrajectoryRecord};
pub use propagation_ck::{PropagationCK, PropagationCKBuilder, PropagationStep};
pub use simple_propagation::SimplePropagation;
