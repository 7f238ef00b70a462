//! Capabilities supplied by external collaborators.

use crate::Vector3;

/// A static vector field that can be sampled at any position.
///
/// Implementations are shared read-only between every worker processing
/// candidates, hence `Send + Sync`. A sample may be non-finite where the
/// model is undefined; consumers decide how to degrade.
///
/// # Examples
///
/// ```
/// use radiant_core::{MagneticField, Vector3};
///
/// struct Dipole;
///
/// impl MagneticField for Dipole {
///     fn field_at(&self, position: &Vector3) -> Vector3 {
///         let r = position.norm();
///         Vector3::new(0.0, 0.0, 1e-9 / (r * r * r))
///     }
/// }
///
/// let b = Dipole.field_at(&Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(b.z, 1e-9);
/// ```
pub trait MagneticField: Send + Sync {
    /// Field vector \[T\] at `position` \[m\].
    fn field_at(&self, position: &Vector3) -> Vector3;
}
