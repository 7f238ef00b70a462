//! Output-stage recording of candidate snapshots.

use std::sync::{Mutex, PoisonError};

use radiant_core::{Candidate, CandidateId, ModuleError, Vector3};
use radiant_module::Module;

/// One recorded snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryRecord {
    /// Candidate the snapshot belongs to.
    pub candidate: CandidateId,
    /// Particle id.
    pub particle: i32,
    /// Path length travelled \[m\].
    pub trajectory_length: f64,
    /// Position \[m\].
    pub position: Vector3,
    /// Unit direction.
    pub direction: Vector3,
    /// Energy \[J\].
    pub energy: f64,
}

impl TrajectoryRecord {
    fn of(candidate: &Candidate) -> Self {
        Self {
            candidate: candidate.id(),
            particle: candidate.current.id(),
            trajectory_length: candidate.trajectory_length(),
            position: candidate.current.position(),
            direction: candidate.current.direction(),
            energy: candidate.current.energy(),
        }
    }
}

/// Collects candidate snapshots into an in-memory buffer.
///
/// Records every pass by default; [`final_only`](Self::final_only) keeps
/// just the snapshot taken when a candidate becomes inactive. Workers
/// append concurrently, so records from one pass are in no particular
/// order across candidates.
#[derive(Debug, Default)]
pub struct TrajectoryObserver {
    final_only: bool,
    records: Mutex<Vec<TrajectoryRecord>>,
}

impl TrajectoryObserver {
    /// Record every pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record only candidates that have just become inactive.
    pub fn final_only() -> Self {
        Self {
            final_only: true,
            records: Mutex::default(),
        }
    }

    /// Copy of all records so far.
    pub fn records(&self) -> Vec<TrajectoryRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Move all records out, leaving the buffer empty.
    pub fn take(&self) -> Vec<TrajectoryRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of records so far.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Module for TrajectoryObserver {
    fn name(&self) -> &str {
        "TrajectoryObserver"
    }

    fn description(&self) -> String {
        if self.final_only {
            "TrajectoryObserver (final states)".to_string()
        } else {
            "TrajectoryObserver (every step)".to_string()
        }
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        if self.final_only && candidate.is_active() {
            return Ok(());
        }
        let record = TrajectoryRecord::of(candidate);
        self.records
            .lock()
            .map_err(|_| ModuleError::ExecutionFailed {
                reason: "trajectory buffer poisoned".to_string(),
            })?
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiant_core::ParticleState;

    #[test]
    fn records_every_pass() {
        let obs = TrajectoryObserver::new();
        let mut c = Candidate::new(ParticleState::default());
        obs.process(&mut c).unwrap();
        c.set_current_step(3.0);
        obs.process(&mut c).unwrap();
        let records = obs.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].trajectory_length, 3.0);
    }

    #[test]
    fn final_only_skips_active_candidates() {
        let obs = TrajectoryObserver::final_only();
        let mut c = Candidate::new(ParticleState::default());
        obs.process(&mut c).unwrap();
        assert!(obs.is_empty());
        c.deactivate("done");
        obs.process(&mut c).unwrap();
        assert_eq!(obs.take().len(), 1);
        assert!(obs.is_empty());
    }
}
