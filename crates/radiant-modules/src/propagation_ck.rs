//! Adaptive Cash–Karp propagation of charged particles.
//!
//! Integrates the ultra-relativistic Lorentz-force equation of motion
//!
//! ```text
//! dx/dt = c · u
//! du/dt = q c² / E · (u × B(x))
//! ```
//!
//! with the embedded 5(4) Runge–Kutta pair of Cash and Karp. The difference
//! between the two estimates of `u` drives step-size control: a step whose
//! error exceeds the tolerance is retried with a smaller step (never below
//! the minimum step); an accepted step proposes the size of the next one.
//!
//! Neutral particles move in a straight line and always propose the
//! maximum step.
//!
//! Constructed via [`PropagationCK::new`] (defaults) or
//! [`PropagationCK::builder`].

use std::sync::Arc;

use radiant_core::units::{C_LIGHT, C_SQUARED, GPC, KPC};
use radiant_core::{Candidate, MagneticField, ModuleError, Vector3};
use radiant_module::Module;

use crate::config::{check_steps, ConfigError};

/// Default relative tolerance on the direction error per step.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
/// Default minimum step \[m\].
pub const DEFAULT_MIN_STEP: f64 = 0.1 * KPC;
/// Default maximum step \[m\].
pub const DEFAULT_MAX_STEP: f64 = 1.0 * GPC;

// Cash–Karp tableau. Row `i` holds the weights of stages `0..i`.
const A: [[f64; 5]; 6] = [
    [0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0],
    [3.0 / 10.0, -9.0 / 10.0, 6.0 / 5.0, 0.0, 0.0],
    [-11.0 / 54.0, 5.0 / 2.0, -70.0 / 27.0, 35.0 / 27.0, 0.0],
    [
        1631.0 / 55296.0,
        175.0 / 512.0,
        575.0 / 13824.0,
        44275.0 / 110592.0,
        253.0 / 4096.0,
    ],
];

// Fifth-order weights.
const B: [f64; 6] = [
    37.0 / 378.0,
    0.0,
    250.0 / 621.0,
    125.0 / 594.0,
    0.0,
    512.0 / 1771.0,
];

// Embedded fourth-order weights.
const B_STAR: [f64; 6] = [
    2825.0 / 27648.0,
    0.0,
    18575.0 / 48384.0,
    13525.0 / 55296.0,
    277.0 / 14336.0,
    1.0 / 4.0,
];

const SAFETY: f64 = 0.95;
const MAX_GROWTH: f64 = 5.0;
const MAX_SHRINK: f64 = 0.1;

/// Result of one accepted integration step.
///
/// Returned by [`PropagationCK::propagate`] and applied to the candidate by
/// [`Module::process`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationStep {
    /// Position after the step \[m\].
    pub position: Vector3,
    /// Unit direction after the step.
    pub direction: Vector3,
    /// Length of the step taken \[m\].
    pub step: f64,
    /// Proposed length of the following step \[m\].
    pub next_step: f64,
}

/// Adaptive Runge–Kutta propagator for charged particles in a magnetic
/// field.
///
/// The field is shared, never mutated. Step bounds and tolerance can be
/// changed after construction through validating setters.
pub struct PropagationCK {
    field: Arc<dyn MagneticField>,
    tolerance: f64,
    min_step: f64,
    max_step: f64,
}

/// Builder for [`PropagationCK`].
///
/// Required field: `field`.
pub struct PropagationCKBuilder {
    field: Option<Arc<dyn MagneticField>>,
    tolerance: f64,
    min_step: f64,
    max_step: f64,
}

impl PropagationCK {
    /// Propagator with default tolerance and step bounds.
    pub fn new(field: Arc<dyn MagneticField>) -> Self {
        Self {
            field,
            tolerance: DEFAULT_TOLERANCE,
            min_step: DEFAULT_MIN_STEP,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    /// Create a new builder.
    pub fn builder() -> PropagationCKBuilder {
        PropagationCKBuilder {
            field: None,
            tolerance: DEFAULT_TOLERANCE,
            min_step: DEFAULT_MIN_STEP,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    /// Integration tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Minimum step \[m\].
    pub fn minimum_step(&self) -> f64 {
        self.min_step
    }

    /// Maximum step \[m\].
    pub fn maximum_step(&self) -> f64 {
        self.max_step
    }

    /// Set the tolerance; must lie in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTolerance`] if out of range.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), ConfigError> {
        check_tolerance(tolerance)?;
        self.tolerance = tolerance;
        Ok(())
    }

    /// Set the minimum step; must be positive and not above the maximum.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidMinimumStep`] or
    /// [`ConfigError::InvalidMaximumStep`].
    pub fn set_minimum_step(&mut self, min_step: f64) -> Result<(), ConfigError> {
        check_steps(min_step, self.max_step, false)?;
        self.min_step = min_step;
        Ok(())
    }

    /// Set the maximum step; must not be below the minimum.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidMaximumStep`].
    pub fn set_maximum_step(&mut self, max_step: f64) -> Result<(), ConfigError> {
        check_steps(self.min_step, max_step, false)?;
        self.max_step = max_step;
        Ok(())
    }

    /// Compute one accepted step for `candidate` without modifying it.
    ///
    /// The trial step is the candidate's proposed next step clipped to
    /// `[minimum_step, maximum_step]`. Rejected trials are retried
    /// internally and never surface as errors.
    ///
    /// # Errors
    ///
    /// - [`ModuleError::MissingEnergy`] for a charged particle without
    ///   positive energy.
    /// - [`ModuleError::NonFiniteState`] if integration diverges.
    pub fn propagate(&self, candidate: &Candidate) -> Result<PropagationStep, ModuleError> {
        let state = &candidate.current;
        let position = state.position();
        let direction = state.direction();
        let mut step = candidate.next_step().clamp(self.min_step, self.max_step);

        let charge = state.charge();
        if charge == 0.0 {
            return Ok(PropagationStep {
                position: position + direction * step,
                direction,
                step,
                next_step: self.max_step,
            });
        }

        let energy = state.energy();
        if !(energy > 0.0 && energy.is_finite()) {
            return Err(ModuleError::MissingEnergy { energy });
        }
        let coefficient = charge * C_SQUARED / energy;

        loop {
            let (x, u, error) = self.try_step(&position, &direction, step / C_LIGHT, coefficient);
            let r = error.norm() / self.tolerance;
            if !r.is_finite() {
                return Err(ModuleError::NonFiniteState);
            }

            if r > 1.0 && step > self.min_step {
                step = (step * SAFETY * r.powf(-0.2))
                    .max(MAX_SHRINK * step)
                    .max(self.min_step);
                continue;
            }

            let proposal = if r > 0.0 {
                step * SAFETY * r.powf(-0.2)
            } else {
                f64::INFINITY
            };
            let next_step = proposal
                .min(MAX_GROWTH * step)
                .min(self.max_step)
                .max(self.min_step);

            if !x.iter().all(|v| v.is_finite()) || !u.iter().all(|v| v.is_finite()) {
                return Err(ModuleError::NonFiniteState);
            }
            let norm = u.norm();
            if norm == 0.0 {
                return Err(ModuleError::NonFiniteState);
            }
            return Ok(PropagationStep {
                position: x,
                direction: u / norm,
                step,
                next_step,
            });
        }
    }

    /// Field at `position`, degraded to zero if the model returns a
    /// non-finite sample.
    fn field_at(&self, position: &Vector3) -> Vector3 {
        let b = self.field.field_at(position);
        if b.iter().all(|v| v.is_finite()) {
            b
        } else {
            log::warn!(
                "non-finite magnetic field at ({:e}, {:e}, {:e}); using zero field",
                position.x,
                position.y,
                position.z
            );
            Vector3::zeros()
        }
    }

    fn derivative(&self, x: &Vector3, u: &Vector3, coefficient: f64) -> (Vector3, Vector3) {
        let b = self.field_at(x);
        (u * C_LIGHT, u.cross(&b) * coefficient)
    }

    /// One Cash–Karp step of duration `h` \[s\]. Returns the fifth-order
    /// position and direction and the direction error estimate.
    fn try_step(
        &self,
        x: &Vector3,
        u: &Vector3,
        h: f64,
        coefficient: f64,
    ) -> (Vector3, Vector3, Vector3) {
        let mut kx = [Vector3::zeros(); 6];
        let mut ku = [Vector3::zeros(); 6];
        for i in 0..6 {
            let mut xi = *x;
            let mut ui = *u;
            for j in 0..i {
                xi += kx[j] * (A[i][j] * h);
                ui += ku[j] * (A[i][j] * h);
            }
            let (dx, du) = self.derivative(&xi, &ui, coefficient);
            kx[i] = dx;
            ku[i] = du;
        }

        let mut x_out = *x;
        let mut u_out = *u;
        let mut u_err = Vector3::zeros();
        for i in 0..6 {
            x_out += kx[i] * (B[i] * h);
            u_out += ku[i] * (B[i] * h);
            u_err += ku[i] * ((B[i] - B_STAR[i]) * h);
        }
        (x_out, u_out, u_err)
    }
}

fn check_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if tolerance > 0.0 && tolerance < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { value: tolerance })
    }
}

impl PropagationCKBuilder {
    /// Set the magnetic field.
    pub fn field(mut self, field: Arc<dyn MagneticField>) -> Self {
        self.field = Some(field);
        self
    }

    /// Set the tolerance (default: [`DEFAULT_TOLERANCE`]).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimum step (default: [`DEFAULT_MIN_STEP`]).
    pub fn minimum_step(mut self, min_step: f64) -> Self {
        self.min_step = min_step;
        self
    }

    /// Set the maximum step (default: [`DEFAULT_MAX_STEP`]).
    pub fn maximum_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    /// Build the propagator.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field is missing, the tolerance is outside
    /// `(0, 1)`, or the step bounds are invalid.
    pub fn build(self) -> Result<PropagationCK, ConfigError> {
        let field = self.field.ok_or(ConfigError::MissingField)?;
        check_tolerance(self.tolerance)?;
        check_steps(self.min_step, self.max_step, false)?;
        Ok(PropagationCK {
            field,
            tolerance: self.tolerance,
            min_step: self.min_step,
            max_step: self.max_step,
        })
    }
}

impl Module for PropagationCK {
    fn name(&self) -> &str {
        "PropagationCK"
    }

    fn description(&self) -> String {
        format!(
            "PropagationCK (tolerance {}, step {} .. {} m)",
            self.tolerance, self.min_step, self.max_step
        )
    }

    fn process(&self, candidate: &mut Candidate) -> Result<(), ModuleError> {
        let step = self.propagate(candidate)?;
        candidate.previous = candidate.current.clone();
        candidate.current.set_position(step.position)?;
        candidate.current.set_direction(step.direction)?;
        candidate.set_current_step(step.step);
        candidate.set_next_step(step.next_step);
        Ok(())
    }
}
