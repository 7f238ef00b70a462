//! Validated rate and cumulative-distribution tables.
//!
//! Both tables are indexed by `log10` of the Lorentz factor. They are built
//! once from already-parsed arrays, checked for structural errors, and are
//! immutable afterwards. A malformed table is a configuration error: it is
//! rejected here rather than producing silently wrong samples later.

use std::error::Error;
use std::fmt;

use crate::{closest_index, interpolate, interpolate_2d};

/// Maximum deviation of a CDF row's last value from 1.
pub const CDF_NORMALISATION_TOLERANCE: f64 = 1e-6;

/// Structural errors in tabulated data.
#[derive(Clone, Debug, PartialEq)]
pub enum TableError {
    /// An axis has fewer than two breakpoints.
    TooFewPoints {
        /// Which axis.
        axis: &'static str,
        /// Number of breakpoints found.
        len: usize,
    },
    /// An axis is not strictly increasing (or contains NaN).
    NotStrictlyIncreasing {
        /// Which axis.
        axis: &'static str,
        /// Index of the first offending breakpoint.
        index: usize,
    },
    /// Value array length does not match the axes.
    LengthMismatch {
        /// Length implied by the axes.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// A tabulated value is NaN or infinite.
    NonFinite {
        /// Flat index of the offending value.
        index: usize,
    },
    /// An interaction rate is negative.
    NegativeRate {
        /// Index of the offending rate.
        index: usize,
        /// The rate value.
        value: f64,
    },
    /// A CDF row decreases or starts below zero.
    NonMonotonicCdf {
        /// Row (Lorentz-factor index).
        row: usize,
        /// Column where the violation occurs.
        column: usize,
    },
    /// A CDF row does not end at 1.
    NotNormalised {
        /// Row (Lorentz-factor index).
        row: usize,
        /// The row's last value.
        last: f64,
    },
    /// Reading a table file failed.
    Io {
        /// File that could not be read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
    /// A table file line could not be parsed.
    Parse {
        /// File being parsed.
        path: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { axis, len } => {
                write!(f, "axis '{axis}' needs at least 2 breakpoints, got {len}")
            }
            Self::NotStrictlyIncreasing { axis, index } => {
                write!(f, "axis '{axis}' is not strictly increasing at index {index}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::NonFinite { index } => write!(f, "non-finite value at index {index}"),
            Self::NegativeRate { index, value } => {
                write!(f, "negative rate {value} at index {index}")
            }
            Self::NonMonotonicCdf { row, column } => {
                write!(f, "CDF row {row} is not non-decreasing from 0 at column {column}")
            }
            Self::NotNormalised { row, last } => {
                write!(f, "CDF row {row} ends at {last}, expected 1")
            }
            Self::Io { path, reason } => write!(f, "cannot read '{path}': {reason}"),
            Self::Parse { path, line, reason } => {
                write!(f, "{path}:{line}: {reason}")
            }
        }
    }
}

impl Error for TableError {}

fn check_axis(axis: &'static str, xs: &[f64]) -> Result<(), TableError> {
    if xs.len() < 2 {
        return Err(TableError::TooFewPoints {
            axis,
            len: xs.len(),
        });
    }
    if let Some(index) = xs.iter().position(|v| !v.is_finite()) {
        return Err(TableError::NotStrictlyIncreasing { axis, index });
    }
    for (i, pair) in xs.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(TableError::NotStrictlyIncreasing { axis, index: i + 1 });
        }
    }
    Ok(())
}

/// Interaction rate per unit length as a function of `log10(gamma)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    lg: Vec<f64>,
    rates: Vec<f64>,
}

impl RateTable {
    /// Build a rate table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the axis has fewer than two breakpoints or
    /// is not strictly increasing, the lengths differ, or any rate is
    /// negative or non-finite.
    pub fn new(lg: Vec<f64>, rates: Vec<f64>) -> Result<Self, TableError> {
        check_axis("log10(gamma)", &lg)?;
        if rates.len() != lg.len() {
            return Err(TableError::LengthMismatch {
                expected: lg.len(),
                actual: rates.len(),
            });
        }
        for (index, &value) in rates.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFinite { index });
            }
            if value < 0.0 {
                return Err(TableError::NegativeRate { index, value });
            }
        }
        Ok(Self { lg, rates })
    }

    /// The `log10(gamma)` breakpoints.
    pub fn axis(&self) -> &[f64] {
        &self.lg
    }

    /// The tabulated rates \[1/m\].
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Lowest and highest tabulated `log10(gamma)`.
    pub fn range(&self) -> (f64, f64) {
        (self.lg[0], self.lg[self.lg.len() - 1])
    }

    /// Whether `lg` lies inside the tabulated range (inclusive).
    pub fn contains(&self, lg: f64) -> bool {
        let (lo, hi) = self.range();
        lg >= lo && lg <= hi
    }

    /// Interpolated rate at `lg`, clamped to the end values outside the
    /// tabulated range.
    pub fn rate(&self, lg: f64) -> f64 {
        interpolate(lg, &self.lg, &self.rates)
    }
}

/// Cumulative distribution of `log10(eps)` for each tabulated
/// `log10(gamma)`.
///
/// Rows are indexed by the Lorentz-factor axis; each row is a CDF over the
/// photon-energy axis that is non-decreasing, starts at or above 0, and
/// ends at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct CdfTable {
    lg: Vec<f64>,
    lgeps: Vec<f64>,
    values: Vec<f64>,
}

impl CdfTable {
    /// Build a CDF table from row-major `values`
    /// (`values[j + i * lgeps.len()]`).
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] for malformed axes, a size mismatch,
    /// non-finite values, a decreasing or negative row, or a row that does
    /// not end within [`CDF_NORMALISATION_TOLERANCE`] of 1.
    pub fn new(lg: Vec<f64>, lgeps: Vec<f64>, values: Vec<f64>) -> Result<Self, TableError> {
        check_axis("log10(gamma)", &lg)?;
        check_axis("log10(eps)", &lgeps)?;
        let expected = lg.len() * lgeps.len();
        if values.len() != expected {
            return Err(TableError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFinite { index });
        }
        for (row, cdf) in values.chunks(lgeps.len()).enumerate() {
            if cdf[0] < 0.0 {
                return Err(TableError::NonMonotonicCdf { row, column: 0 });
            }
            if let Some(k) = cdf.windows(2).position(|w| w[1] < w[0]) {
                return Err(TableError::NonMonotonicCdf { row, column: k + 1 });
            }
            let last = cdf[cdf.len() - 1];
            if (last - 1.0).abs() > CDF_NORMALISATION_TOLERANCE {
                return Err(TableError::NotNormalised { row, last });
            }
        }
        Ok(Self { lg, lgeps, values })
    }

    /// The `log10(gamma)` breakpoints (rows).
    pub fn lg_axis(&self) -> &[f64] {
        &self.lg
    }

    /// The `log10(eps)` breakpoints (columns).
    pub fn lgeps_axis(&self) -> &[f64] {
        &self.lgeps
    }

    /// The CDF row for Lorentz-factor index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.lgeps.len();
        &self.values[row * n..(row + 1) * n]
    }

    /// CDF value at `(lg, lgeps)`; exactly `0.0` outside the grid.
    pub fn cdf(&self, lg: f64, lgeps: f64) -> f64 {
        interpolate_2d(lg, lgeps, &self.lg, &self.lgeps, &self.values)
    }

    /// Sample `log10(eps)` for uniform deviate `u` in `[0, 1)`.
    ///
    /// Uses the row nearest to `lg` and inverts it by linear interpolation
    /// between the bracketing CDF values. Plateaus in the row are skipped,
    /// so zero-probability bins are never sampled.
    pub fn invert(&self, lg: f64, u: f64) -> f64 {
        let row = closest_index(lg, &self.lg);
        interpolate(u, self.row(row), &self.lgeps)
    }
}
