//! Module trait and staged module chain for Radiant simulations.
//!
//! A [`Module`] is a `&self` operator that inspects and mutates one
//! [`Candidate`](radiant_core::Candidate) per call. A [`ModuleChain`] orders
//! modules into [`Stage`]s and runs every module once per pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod module;

pub use chain::{ChainError, ModuleChain};
pub use module::{Module, Stage};
