//! Serial and parallel runs of a stochastic chain agree exactly.

use std::sync::Arc;

use radiant_core::units::{MPC, NANO_GAUSS};
use radiant_core::{Candidate, MagneticField, Vector3};
use radiant_engine::{RunReport, Simulation, SimulationConfig};
use radiant_module::{ModuleChain, Stage};
use radiant_modules::{
    ElasticScattering, InteractionTables, MaximumTrajectoryLength, PhotonField, PropagationCK,
    UniformMagneticField,
};
use radiant_test_utils::{energy_at_lg, flat_rate_table, nucleus_state, uniform_cdf_table};

const MAX_LENGTH: f64 = 5.0 * MPC;

fn simulation(parallel: bool, seed: u64) -> Simulation {
    let field: Arc<dyn MagneticField> =
        Arc::new(UniformMagneticField::new(Vector3::new(0.0, 0.0, NANO_GAUSS)));
    let propagation = PropagationCK::builder()
        .field(field)
        .minimum_step(0.01 * MPC)
        .maximum_step(1.0 * MPC)
        .build()
        .unwrap();
    // About three interactions per Mpc for He-4.
    let tables = InteractionTables::new(flat_rate_table(3.0 / MPC), uniform_cdf_table());
    let scattering = ElasticScattering::new(PhotonField::Cmb, tables).with_photons(true);

    let chain = ModuleChain::new()
        .with(Stage::Propagation, propagation)
        .with(Stage::Interaction, scattering)
        .with(
            Stage::BreakCondition,
            MaximumTrajectoryLength::new(MAX_LENGTH).unwrap(),
        );
    let mut config = SimulationConfig::new(chain);
    config.parallel = parallel;
    config.seed = seed;
    Simulation::new(config).unwrap()
}

fn run(parallel: bool, seed: u64) -> RunReport {
    let sim = simulation(parallel, seed);
    let primaries: Vec<Candidate> = (0..8)
        .map(|i| sim.primary(nucleus_state(4, 2, energy_at_lg(4, 9.0)), i))
        .collect();
    sim.run(primaries).unwrap()
}

type Fingerprint = (u64, Option<u64>, i32, u64, u64, [u64; 3]);

fn fingerprint(report: &RunReport) -> Vec<Fingerprint> {
    let mut rows: Vec<Fingerprint> = report
        .finished
        .iter()
        .map(|c| {
            let p = c.current.position();
            (
                c.id().0,
                c.parent().map(|id| id.0),
                c.current.id(),
                c.current.energy().to_bits(),
                c.trajectory_length().to_bits(),
                [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()],
            )
        })
        .collect();
    rows.sort_unstable();
    rows
}

#[test]
fn parallel_matches_serial() {
    let serial = run(false, 5);
    let parallel = run(true, 5);
    assert!(serial.is_complete());
    assert!(serial.metrics.spawned > 0, "expected photon secondaries");
    let counts = |r: &RunReport| {
        let m = &r.metrics;
        (m.passes, m.processed, m.spawned, m.retired)
    };
    assert_eq!(counts(&serial), counts(&parallel));
    assert_eq!(fingerprint(&serial), fingerprint(&parallel));
}

#[test]
fn same_seed_same_run() {
    assert_eq!(fingerprint(&run(true, 9)), fingerprint(&run(true, 9)));
}

#[test]
fn different_seed_different_run() {
    assert_ne!(fingerprint(&run(false, 1)), fingerprint(&run(false, 2)));
}

#[test]
fn secondaries_inherit_lineage() {
    let report = run(true, 3);
    let photons: Vec<&Candidate> = report
        .finished
        .iter()
        .filter(|c| c.parent().is_some())
        .collect();
    assert!(!photons.is_empty());
    for photon in photons {
        assert_eq!(photon.current.id(), radiant_core::id::PHOTON);
        let parent = photon.parent().unwrap();
        assert!(parent.0 < 8, "photons come from the primaries");
        assert!(photon.id().0 >= 8);
        assert!(photon.trajectory_length() >= MAX_LENGTH);
    }
}
