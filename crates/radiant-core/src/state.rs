//! Instantaneous kinematic and identity state of one particle.

use crate::error::StateError;
use crate::id::{self, ELECTRON, NEUTRON, PROTON};
use crate::units::{AMU, C_LIGHT, C_SQUARED, ELEMENTARY_CHARGE, H_PLANCK};
use crate::units::{MASS_ELECTRON, MASS_NEUTRON, MASS_PROTON};
use crate::Vector3;

/// Position, direction, energy, and identity of a particle at one instant.
///
/// Setters validate their input so that a `ParticleState` never holds a
/// zero-length or non-finite direction, a non-finite position, or a
/// negative energy. A freshly constructed state has energy `0.0`, meaning
/// "not yet assigned"; [`set_energy`](Self::set_energy) only accepts
/// strictly positive values.
///
/// Charge and mass are cached from the particle id in
/// [`set_id`](Self::set_id).
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleState {
    id: i32,
    charge: f64,
    mass: f64,
    energy: f64,
    position: Vector3,
    direction: Vector3,
}

impl Default for ParticleState {
    fn default() -> Self {
        Self {
            id: 0,
            charge: 0.0,
            mass: 0.0,
            energy: 0.0,
            position: Vector3::zeros(),
            direction: Vector3::new(1.0, 0.0, 0.0),
        }
    }
}

impl ParticleState {
    /// Build a fully specified state.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] raised by the individual setters.
    pub fn new(
        id: i32,
        energy: f64,
        position: Vector3,
        direction: Vector3,
    ) -> Result<Self, StateError> {
        let mut state = Self::default();
        state.set_id(id);
        state.set_energy(energy)?;
        state.set_position(position)?;
        state.set_direction(direction)?;
        Ok(state)
    }

    /// Particle id (nucleus scheme or PDG code).
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Set the particle id and derive charge and mass from it.
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
        if id::is_nucleus(id) {
            let a = id::mass_number(id);
            let z = id::charge_number(id);
            self.charge = f64::from(z) * ELEMENTARY_CHARGE;
            self.mass = match (a, z.abs()) {
                (1, 1) => MASS_PROTON,
                (1, 0) => MASS_NEUTRON,
                _ => f64::from(a) * AMU,
            };
            return;
        }
        let (charge, mass) = match id {
            ELECTRON => (-ELEMENTARY_CHARGE, MASS_ELECTRON),
            x if x == -ELECTRON => (ELEMENTARY_CHARGE, MASS_ELECTRON),
            PROTON => (ELEMENTARY_CHARGE, MASS_PROTON),
            x if x == -PROTON => (-ELEMENTARY_CHARGE, MASS_PROTON),
            NEUTRON => (0.0, MASS_NEUTRON),
            _ => (0.0, 0.0),
        };
        self.charge = charge;
        self.mass = mass;
    }

    /// Charge \[C\].
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Rest mass \[kg\].
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Charge number derived from the id (0 for non-nuclei).
    pub fn charge_number(&self) -> i32 {
        id::charge_number(self.id)
    }

    /// Mass number derived from the id (0 for non-nuclei).
    pub fn mass_number(&self) -> i32 {
        id::mass_number(self.id)
    }

    /// Total energy \[J\]; `0.0` if never assigned.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Set the total energy.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidEnergy`] if `energy` is non-finite or `<= 0`.
    pub fn set_energy(&mut self, energy: f64) -> Result<(), StateError> {
        if !energy.is_finite() || energy <= 0.0 {
            return Err(StateError::InvalidEnergy { value: energy });
        }
        self.energy = energy;
        Ok(())
    }

    /// Frequency equivalent of the energy, `E / h` \[Hz\].
    pub fn frequency(&self) -> f64 {
        self.energy / H_PLANCK
    }

    /// Set the energy from a frequency, `E = h f`.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidFrequency`] if `frequency` is non-finite or `<= 0`.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), StateError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(StateError::InvalidFrequency { value: frequency });
        }
        self.set_energy(frequency * H_PLANCK)
    }

    /// Position \[m\].
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Set the position.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidPosition`] if any component is non-finite.
    pub fn set_position(&mut self, position: Vector3) -> Result<(), StateError> {
        if !position.iter().all(|c| c.is_finite()) {
            return Err(StateError::InvalidPosition);
        }
        self.position = position;
        Ok(())
    }

    /// Unit direction of motion.
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Set the direction of motion; the vector is normalised on assignment.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidDirection`] if the vector is zero-length or
    /// contains non-finite components.
    pub fn set_direction(&mut self, direction: Vector3) -> Result<(), StateError> {
        let norm = direction.norm();
        if !norm.is_finite() || norm == 0.0 {
            return Err(StateError::InvalidDirection { norm });
        }
        self.direction = direction / norm;
        Ok(())
    }

    /// Lorentz factor `E / (m c²)`.
    ///
    /// Infinite for massless particles with positive energy.
    pub fn lorentz_factor(&self) -> f64 {
        self.energy / (self.mass * C_SQUARED)
    }

    /// Momentum vector in the ultra-relativistic limit, `E/c · û` \[kg m/s\].
    pub fn momentum(&self) -> Vector3 {
        self.direction * (self.energy / C_LIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{nucleus_id, PHOTON};
    use crate::units::EEV;

    #[test]
    fn default_direction_is_unit() {
        let s = ParticleState::default();
        assert_eq!(s.direction().norm(), 1.0);
        assert_eq!(s.energy(), 0.0);
    }

    #[test]
    fn direction_is_normalised() {
        let mut s = ParticleState::default();
        s.set_direction(Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert!((s.direction().norm() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn zero_direction_rejected() {
        let mut s = ParticleState::default();
        let before = s.direction();
        let err = s.set_direction(Vector3::zeros()).unwrap_err();
        assert_eq!(err, StateError::InvalidDirection { norm: 0.0 });
        assert_eq!(s.direction(), before, "rejected value must not be stored");
    }

    #[test]
    fn nan_direction_rejected() {
        let mut s = ParticleState::default();
        assert!(s.set_direction(Vector3::new(f64::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn non_positive_energy_rejected() {
        let mut s = ParticleState::default();
        assert!(s.set_energy(0.0).is_err());
        assert!(s.set_energy(-1.0).is_err());
        assert!(s.set_energy(f64::INFINITY).is_err());
        assert_eq!(s.energy(), 0.0);
        s.set_energy(1.0).unwrap();
        assert_eq!(s.energy(), 1.0);
    }

    #[test]
    fn non_finite_position_rejected() {
        let mut s = ParticleState::default();
        assert_eq!(
            s.set_position(Vector3::new(0.0, f64::INFINITY, 0.0)),
            Err(StateError::InvalidPosition)
        );
    }

    #[test]
    fn id_derives_charge_and_mass() {
        let mut s = ParticleState::default();
        s.set_id(nucleus_id(56, 26));
        assert_eq!(s.charge_number(), 26);
        assert_eq!(s.mass_number(), 56);
        assert!((s.charge() - 26.0 * ELEMENTARY_CHARGE).abs() < 1e-30);
        assert!((s.mass() - 56.0 * AMU).abs() < 1e-40);

        s.set_id(nucleus_id(1, 0));
        assert_eq!(s.charge(), 0.0);
        assert_eq!(s.mass(), MASS_NEUTRON);

        s.set_id(PHOTON);
        assert_eq!(s.charge(), 0.0);
        assert_eq!(s.mass(), 0.0);

        s.set_id(ELECTRON);
        assert!(s.charge() < 0.0);
    }

    #[test]
    fn lorentz_factor_of_proton() {
        let mut s = ParticleState::default();
        s.set_id(nucleus_id(1, 1));
        s.set_energy(100.0 * EEV).unwrap();
        let expected = 100.0 * EEV / (MASS_PROTON * C_SQUARED);
        assert!((s.lorentz_factor() / expected - 1.0).abs() < 1e-12);
        assert!(s.lorentz_factor() > 1e11);
    }

    #[test]
    fn frequency_round_trip() {
        let mut s = ParticleState::default();
        s.set_frequency(1e9).unwrap();
        assert!((s.frequency() / 1e9 - 1.0).abs() < 1e-12);
        assert!(s.set_frequency(0.0).is_err());
    }

    #[test]
    fn new_validates_every_field() {
        let ok = ParticleState::new(
            nucleus_id(1, 1),
            EEV,
            Vector3::zeros(),
            Vector3::new(0.0, 2.0, 0.0),
        )
        .unwrap();
        assert_eq!(ok.direction(), Vector3::new(0.0, 1.0, 0.0));

        let bad = ParticleState::new(nucleus_id(1, 1), EEV, Vector3::zeros(), Vector3::zeros());
        assert!(matches!(bad, Err(StateError::InvalidDirection { .. })));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn assigned_direction_is_unit(
                x in -1e6f64..1e6,
                y in -1e6f64..1e6,
                z in -1e6f64..1e6,
            ) {
                let v = Vector3::new(x, y, z);
                prop_assume!(v.norm() > 1e-3);
                let mut s = ParticleState::default();
                s.set_direction(v).unwrap();
                prop_assert!((s.direction().norm() - 1.0).abs() < 1e-12);
                prop_assert!(s.direction().dot(&v) > 0.0);
            }

            #[test]
            fn positive_energy_is_stored_exactly(e in 1e-20f64..1e20) {
                let mut s = ParticleState::default();
                s.set_energy(e).unwrap();
                prop_assert_eq!(s.energy(), e);
            }
        }
    }
}
