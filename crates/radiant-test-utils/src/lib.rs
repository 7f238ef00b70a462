//! Test utilities and mock modules for Radiant development.
//!
//! Provides mock [`Module`](radiant_module::Module) implementations in
//! [`fixtures`] and constructors for common particles and tables.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstantStep, CountingModule, FailingModule, SpawnOnce};

use radiant_core::units::{AMU, C_SQUARED, EEV};
use radiant_core::{nucleus_id, Candidate, ParticleState, Vector3};
use radiant_interp::{CdfTable, RateTable};

/// A nucleus at the origin heading along +y.
pub fn nucleus_state(a: i32, z: i32, energy: f64) -> ParticleState {
    ParticleState::new(
        nucleus_id(a, z),
        energy,
        Vector3::zeros(),
        Vector3::new(0.0, 1.0, 0.0),
    )
    .expect("valid nucleus state")
}

/// A 100 EeV proton candidate (nucleus-coded) with the given seed.
pub fn proton_candidate(seed: u64) -> Candidate {
    Candidate::with_seed(nucleus_state(1, 1, 100.0 * EEV), seed)
}

/// Energy of a nucleus with mass number `a` at Lorentz factor `10^lg`.
pub fn energy_at_lg(a: i32, lg: f64) -> f64 {
    10f64.powf(lg) * f64::from(a) * AMU * C_SQUARED
}

/// Rate table over `log10(gamma)` in `[6, 14]` with a constant rate
/// \[1/m\].
pub fn flat_rate_table(rate: f64) -> RateTable {
    RateTable::new(vec![6.0, 10.0, 14.0], vec![rate; 3]).expect("valid rate table")
}

/// CDF table over `log10(gamma)` in `[6, 14]` whose rows are uniform in
/// `log10(eps / J)` over `[-23, -21]`.
pub fn uniform_cdf_table() -> CdfTable {
    let lg = vec![6.0, 10.0, 14.0];
    let lgeps = vec![-23.0, -22.5, -22.0, -21.5, -21.0];
    let row = [0.0, 0.25, 0.5, 0.75, 1.0];
    let values = lg.iter().flat_map(|_| row).collect();
    CdfTable::new(lg, lgeps, values).expect("valid cdf table")
}
