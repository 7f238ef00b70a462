//! Pass-based simulation driver for Radiant module chains.
//!
//! [`Simulation`] owns a validated [`SimulationConfig`] and drives batches
//! of candidates through the chain until every candidate is inactive or
//! the pass cap is reached.
//!
//! # Pass structure
//!
//! 1. Every active candidate runs through the chain once, on the rayon
//!    pool when [`SimulationConfig::parallel`] is set. Each worker owns
//!    its candidate exclusively for the pass; modules and the tables they
//!    hold are shared read-only.
//! 2. At the pass boundary, secondaries are moved out of their parents in
//!    parent order and given the next sequential ids, and inactive
//!    candidates are retired.
//!
//! This is the only synchronisation point, and the id assignment depends
//! only on candidate order, so serial and parallel runs with the same seed
//! produce identical results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use metrics::{PassMetrics, RunMetrics};
pub use simulation::{RunReport, Simulation, SimulationError};
