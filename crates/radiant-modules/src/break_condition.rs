//! Termination conditions.

use radiant_core::units::MPC;
use radiant_core::{Candidate, ModuleError};
use radiant_module::Module;

use crate::config::ConfigError;

/// Reason recorded when a candidate reaches its maximum path length.
pub const REASON_MAX_LENGTH: &str = "MaximumTrajectoryLength";
/// Reason recorded when a candidate falls below the minimum energy.
pub const REASON_MIN_ENERGY: &str = "MinimumEnergy";

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

/// Deactivates candidates once they have travelled a given path length.
///
/// Until then the next step is capped at the remaining length, so the
/// limit is reached exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct MaximumTrajectoryLength {
    max_length: f64,
}

impl MaximumTrajectoryLength {
    /// Limit the path length to `max_length` \[m\].
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] if negative or NaN.
    pub fn new(max_length: f64) -> Result<Self, ConfigError> {
        check_threshold("maximum trajectory length", max_length)?;
        Ok(Self { max_length })
    }

    /// The configured limit \[m\].
    pub fn max_length(&self) -> f64 {
        self.max_length
    }
}

impl Module for MaximumTrajectoryLength {
    fn name(&self) -> &str {
        "MaximumTrajectoryLength"
    }

    fn description(&self) -> String {
        format!("MaximumTrajectoryLength ({} Mpc)", self.max_length / MPC)
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        let length = candidate.trajectory_length();
        if length >= self.max_length {
            candidate.deactivate(REASON_MAX_LENGTH);
        } else {
            candidate.limit_next_step(self.max_length - length);
        }
        Ok(())
    }
}

/// Deactivates candidates whose energy has dropped to a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumEnergy {
    min_energy: f64,
}

impl MinimumEnergy {
    /// Stop candidates at or below `min_energy` \[J\].
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] if negative or NaN.
    pub fn new(min_energy: f64) -> Result<Self, ConfigError> {
        check_threshold("minimum energy", min_energy)?;
        Ok(Self { min_energy })
    }

    /// The configured threshold \[J\].
    pub fn min_energy(&self) -> f64 {
        self.min_energy
    }
}

impl Module for MinimumEnergy {
    fn name(&self) -> &str {
        "MinimumEnergy"
    }

    fn description(&self) -> String {
        format!("MinimumEnergy ({} J)", self.min_energy)
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        if candidate.current.energy() <= self.min_energy {
            candidate.deactivate(REASON_MIN_ENERGY);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiant_core::candidate::DEACTIVATED;
    use radiant_core::ParticleState;

    #[test]
    fn limits_next_step_to_remaining_length() {
        let m = MaximumTrajectoryLength::new(10.0).unwrap();
        let mut c = Candidate::new(ParticleState::default());
        c.set_next_step(100.0);
        c.set_current_step(4.0);
        m.process(&mut c).unwrap();
        assert!(c.is_active());
        assert_eq!(c.next_step(), 6.0);
    }

    #[test]
    fn deactivates_at_limit() {
        let m = MaximumTrajectoryLength::new(10.0).unwrap();
        let mut c = Candidate::new(ParticleState::default());
        c.set_trajectory_length(10.0);
        m.process(&mut c).unwrap();
        assert!(!c.is_active());
        assert_eq!(c.property(DEACTIVATED), Some(REASON_MAX_LENGTH));
    }

    #[test]
    fn minimum_energy() {
        let m = MinimumEnergy::new(5.0).unwrap();
        let mut state = ParticleState::default();
        state.set_energy(6.0).unwrap();
        let mut c = Candidate::new(state);
        m.process(&mut c).unwrap();
        assert!(c.is_active());
        c.current.set_energy(5.0).unwrap();
        m.process(&mut c).unwrap();
        assert_eq!(c.property(DEACTIVATED), Some(REASON_MIN_ENERGY));
    }

    #[test]
    fn unassigned_energy_counts_as_below_threshold() {
        let m = MinimumEnergy::new(0.0).unwrap();
        let mut c = Candidate::new(ParticleState::default());
        m.process(&mut c).unwrap();
        assert!(!c.is_active());
    }

    #[test]
    fn rejects_negative_thresholds() {
        assert!(MaximumTrajectoryLength::new(-1.0).is_err());
        assert!(MinimumEnergy::new(f64::NAN).is_err());
    }
}
