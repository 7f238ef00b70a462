//! Module configuration errors.

use std::error::Error;
use std::fmt;

use radiant_interp::TableError;

/// Errors raised while building or reconfiguring a module.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A propagator was built without a magnetic field.
    MissingField,
    /// Integration tolerance outside `(0, 1)`.
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },
    /// Minimum step is negative, non-finite, or (where required) zero.
    InvalidMinimumStep {
        /// The rejected step \[m\].
        value: f64,
    },
    /// Maximum step is non-finite or below the minimum step.
    InvalidMaximumStep {
        /// The rejected step \[m\].
        value: f64,
        /// The configured minimum step \[m\].
        minimum: f64,
    },
    /// A break-condition threshold is negative or NaN.
    InvalidThreshold {
        /// Which threshold.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Interaction tables could not be loaded or failed validation.
    Table(TableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "magnetic field is required"),
            Self::InvalidTolerance { value } => {
                write!(f, "tolerance must lie in (0, 1), got {value}")
            }
            Self::InvalidMinimumStep { value } => {
                write!(f, "minimum step must be finite and positive, got {value}")
            }
            Self::InvalidMaximumStep { value, minimum } => {
                write!(f, "maximum step {value} must be finite and >= minimum step {minimum}")
            }
            Self::InvalidThreshold { name, value } => {
                write!(f, "{name} must be >= 0, got {value}")
            }
            Self::Table(e) => write!(f, "interaction table: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for ConfigError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

/// Check a `(min, max)` step pair. `min` may be zero only if
/// `allow_zero_min` is set.
pub(crate) fn check_steps(min: f64, max: f64, allow_zero_min: bool) -> Result<(), ConfigError> {
    let min_ok = min.is_finite() && (min > 0.0 || (allow_zero_min && min == 0.0));
    if !min_ok {
        return Err(ConfigError::InvalidMinimumStep { value: min });
    }
    if !max.is_finite() || max < min {
        return Err(ConfigError::InvalidMaximumStep {
            value: max,
            minimum: min,
        });
    }
    Ok(())
}
