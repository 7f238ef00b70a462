//! Benchmark profiles for the Radiant propagation framework.
//!
//! - [`reference_profile`]: helium nuclei in a 1 nG field with elastic
//!   scattering, stopped after 10 Mpc.
//! - [`reference_primaries`]: seeded primaries for that profile.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use radiant_core::units::{AMU, C_SQUARED, MPC, NANO_GAUSS};
use radiant_core::{nucleus_id, Candidate, MagneticField, ParticleState, Vector3};
use radiant_engine::{Simulation, SimulationConfig};
use radiant_interp::{CdfTable, RateTable};
use radiant_module::{ModuleChain, Stage};
use radiant_modules::{
    ElasticScattering, InteractionTables, MaximumTrajectoryLength, PhotonField, PropagationCK,
    UniformMagneticField,
};

/// Path length after which reference candidates stop \[m\].
pub const REFERENCE_LENGTH: f64 = 10.0 * MPC;

/// Synthetic elastic-scattering tables: flat rate of `rate` \[1/m\] over
/// `log10(gamma)` in `[6, 14]` and a CDF uniform in `log10(eps)`.
pub fn synthetic_tables(rate: f64) -> InteractionTables {
    let lg: Vec<f64> = (0..=80).map(|i| 6.0 + 0.1 * f64::from(i)).collect();
    let lgeps: Vec<f64> = (0..=40).map(|i| -23.0 + 0.05 * f64::from(i)).collect();
    let rates = vec![rate; lg.len()];
    let row: Vec<f64> = (0..lgeps.len())
        .map(|j| j as f64 / (lgeps.len() - 1) as f64)
        .collect();
    let values = lg.iter().flat_map(|_| row.iter().copied()).collect();
    InteractionTables::new(
        RateTable::new(lg.clone(), rates).expect("valid synthetic rate table"),
        CdfTable::new(lg, lgeps, values).expect("valid synthetic cdf table"),
    )
}

/// Build the reference benchmark configuration.
///
/// Chain: PropagationCK (0.01 .. 1 Mpc) → ElasticScattering (about one
/// interaction per Mpc, photons on) → MaximumTrajectoryLength(10 Mpc).
pub fn reference_profile(seed: u64, parallel: bool) -> SimulationConfig {
    let field: Arc<dyn MagneticField> =
        Arc::new(UniformMagneticField::new(Vector3::new(0.0, 0.0, NANO_GAUSS)));
    let propagation = PropagationCK::builder()
        .field(field)
        .minimum_step(0.01 * MPC)
        .maximum_step(1.0 * MPC)
        .build()
        .expect("valid reference propagator");

    let chain = ModuleChain::new()
        .with(Stage::Propagation, propagation)
        .with(
            Stage::Interaction,
            ElasticScattering::new(PhotonField::Cmb, synthetic_tables(1.0 / MPC)).with_photons(true),
        )
        .with(
            Stage::BreakCondition,
            MaximumTrajectoryLength::new(REFERENCE_LENGTH).expect("valid length"),
        );

    let mut config = SimulationConfig::new(chain);
    config.seed = seed;
    config.parallel = parallel;
    config
}

/// `n` helium primaries at Lorentz factor 1e9, heading along +y.
pub fn reference_primaries(sim: &Simulation, n: u64) -> Vec<Candidate> {
    let energy = 1e9 * 4.0 * AMU * C_SQUARED;
    (0..n)
        .map(|i| {
            let state = ParticleState::new(
                nucleus_id(4, 2),
                energy,
                Vector3::zeros(),
                Vector3::new(0.0, 1.0, 0.0),
            )
            .expect("valid helium state");
            sim.primary(state, i)
        })
        .collect()
}
