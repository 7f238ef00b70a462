//! A break condition on path length terminates every candidate within
//! ceil(L / minimum step) passes.

use proptest::prelude::*;
use radiant_core::{Candidate, ParticleState};
use radiant_engine::{Simulation, SimulationConfig};
use radiant_module::{ModuleChain, Stage};
use radiant_modules::{MaximumTrajectoryLength, SimplePropagation};

fn run(max_length: f64, min_step: f64, max_step: f64, n: usize) -> radiant_engine::RunReport {
    let chain = ModuleChain::new()
        .with(
            Stage::Propagation,
            SimplePropagation::new(min_step, max_step).unwrap(),
        )
        .with(
            Stage::BreakCondition,
            MaximumTrajectoryLength::new(max_length).unwrap(),
        );
    let sim = Simulation::new(SimulationConfig::new(chain)).unwrap();
    let candidates = (0..n)
        .map(|_| Candidate::new(ParticleState::default()))
        .collect();
    sim.run(candidates).unwrap()
}

#[test]
fn fixed_step_takes_exactly_length_over_step_passes() {
    let report = run(1.0, 0.25, 0.25, 3);
    assert!(report.is_complete());
    assert_eq!(report.metrics.passes, 4);
    for c in &report.finished {
        assert_eq!(c.trajectory_length(), 1.0);
    }
}

#[test]
fn remaining_length_below_minimum_step_overshoots_once() {
    // 2.5 / 1.0: two full steps, then a minimum step past the limit.
    let report = run(2.5, 1.0, 1.0, 1);
    assert_eq!(report.metrics.passes, 3);
    assert_eq!(report.finished[0].trajectory_length(), 3.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn terminates_within_bound(k in 0u32..6, n in 1u32..200, half in any::<bool>(), growth in 1u32..8) {
        // Dyadic steps and lengths keep the path-length sums exact.
        let min_step = 2f64.powi(-(k as i32));
        let units = f64::from(n) + if half { 0.5 } else { 0.0 };
        let max_length = units * min_step;
        let report = run(max_length, min_step, f64::from(growth) * min_step, 2);
        prop_assert!(report.is_complete());
        prop_assert!(report.metrics.passes <= units.ceil() as u64);
        for c in &report.finished {
            prop_assert!(c.trajectory_length() >= max_length);
            prop_assert!(c.trajectory_length() < max_length + min_step);
        }
    }
}
