//! Magnetic field models.

use std::sync::Arc;

use radiant_core::{MagneticField, Vector3};

/// A field that is the same everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformMagneticField {
    value: Vector3,
}

impl UniformMagneticField {
    /// Field of constant `value` \[T\].
    pub fn new(value: Vector3) -> Self {
        Self { value }
    }

    /// The constant field vector \[T\].
    pub fn value(&self) -> Vector3 {
        self.value
    }
}

impl MagneticField for UniformMagneticField {
    fn field_at(&self, _position: &Vector3) -> Vector3 {
        self.value
    }
}

/// Superposition of several field models.
///
/// An empty list is the zero field.
#[derive(Clone, Default)]
pub struct MagneticFieldList {
    fields: Vec<Arc<dyn MagneticField>>,
}

impl MagneticFieldList {
    /// An empty superposition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component.
    pub fn add(&mut self, field: Arc<dyn MagneticField>) {
        self.fields.push(field);
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no components.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl MagneticField for MagneticFieldList {
    fn field_at(&self, position: &Vector3) -> Vector3 {
        self.fields
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + f.field_at(position))
    }
}
