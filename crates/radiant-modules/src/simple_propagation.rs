//! Rectilinear propagation.

use radiant_core::units::{KPC, MPC};
use radiant_core::{Candidate, ModuleError};
use radiant_module::Module;

use crate::config::{check_steps, ConfigError};
use crate::propagation_ck::PropagationStep;

/// Moves every candidate in a straight line along its direction.
///
/// The step is the proposed next step clipped to `[min_step, max_step]`;
/// the proposal for the following step is always `max_step`.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplePropagation {
    min_step: f64,
    max_step: f64,
}

impl Default for SimplePropagation {
    fn default() -> Self {
        Self {
            min_step: 0.0,
            max_step: 4000.0 * MPC,
        }
    }
}

impl SimplePropagation {
    /// Propagator with the given step bounds \[m\].
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `0 <= min_step <= max_step`, both finite.
    pub fn new(min_step: f64, max_step: f64) -> Result<Self, ConfigError> {
        check_steps(min_step, max_step, true)?;
        Ok(Self { min_step, max_step })
    }

    /// Minimum step \[m\].
    pub fn minimum_step(&self) -> f64 {
        self.min_step
    }

    /// Maximum step \[m\].
    pub fn maximum_step(&self) -> f64 {
        self.max_step
    }

    /// Set the minimum step.
    ///
    /// # Errors
    ///
    /// Returns `Err` if negative or above the maximum.
    pub fn set_minimum_step(&mut self, min_step: f64) -> Result<(), ConfigError> {
        check_steps(min_step, self.max_step, true)?;
        self.min_step = min_step;
        Ok(())
    }

    /// Set the maximum step.
    ///
    /// # Errors
    ///
    /// Returns `Err` if below the minimum.
    pub fn set_maximum_step(&mut self, max_step: f64) -> Result<(), ConfigError> {
        check_steps(self.min_step, max_step, true)?;
        self.max_step = max_step;
        Ok(())
    }

    /// Compute the straight-line step for `candidate`.
    pub fn propagate(&self, candidate: &Candidate) -> PropagationStep {
        let step = candidate.next_step().clamp(self.min_step, self.max_step);
        let direction = candidate.current.direction();
        PropagationStep {
            position: candidate.current.position() + direction * step,
            direction,
            step,
            next_step: self.max_step,
        }
    }
}

impl Module for SimplePropagation {
    fn name(&self) -> &str {
        "SimplePropagation"
    }

    fn description(&self) -> String {
        format!(
            "SimplePropagation (step {} .. {} kpc)",
            self.min_step / KPC,
            self.max_step / KPC
        )
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        let step = self.propagate(candidate);
        candidate.previous = candidate.current.clone();
        candidate.current.set_position(step.position)?;
        candidate.set_current_step(step.step);
        candidate.set_next_step(step.next_step);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiant_core::{ParticleState, Vector3};

    #[test]
    fn step_is_clipped_to_minimum() {
        let propa = SimplePropagation::new(20.0, 100.0).unwrap();

        let mut state = ParticleState::default();
        state.set_direction(Vector3::new(0.0, 1.0, 0.0)).unwrap();
        let mut c = Candidate::new(state);
        c.set_next_step(10.0);

        propa.process(&mut c).unwrap();

        assert_eq!(c.current_step(), 20.0);
        assert_eq!(c.next_step(), 100.0);
        assert_eq!(c.created.position(), Vector3::zeros());
        assert_eq!(c.created.direction(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.previous.position(), Vector3::zeros());
        assert_eq!(c.previous.direction(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(c.current.position(), Vector3::new(0.0, 20.0, 0.0));
        assert_eq!(c.current.direction(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn step_is_clipped_to_maximum() {
        let propa = SimplePropagation::new(0.0, 5.0).unwrap();
        let mut c = Candidate::new(ParticleState::default());
        c.set_next_step(50.0);
        propa.process(&mut c).unwrap();
        assert_eq!(c.current_step(), 5.0);
        assert_eq!(c.current.position(), Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(c.trajectory_length(), 5.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(SimplePropagation::new(10.0, 1.0).is_err());
        assert!(SimplePropagation::new(-1.0, 1.0).is_err());
        let mut propa = SimplePropagation::default();
        assert!(propa.set_minimum_step(1e30 * MPC).is_err());
        assert!(propa.set_maximum_step(1.0).is_ok());
    }
}
