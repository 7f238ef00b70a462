//! Interpolation primitives and validated interaction tables.
//!
//! Every table-driven effect in Radiant reduces to one of four lookups:
//!
//! | Function | Out-of-range policy |
//! |----------|---------------------|
//! | [`interpolate`] | clamp to the first/last value |
//! | [`interpolate_2d`] | exactly `0.0` |
//! | [`interpolate_equidistant`] | clamp to the first/last value |
//! | [`closest_index`] | clamp to the first/last index |
//!
//! Callers of the 2D lookup treat "outside the grid" as "no contribution";
//! the 1D lookups never return zero for lack of data.
//!
//! [`RateTable`] and [`CdfTable`] wrap the raw arrays of a tabulated
//! interaction and validate them once at construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bilinear;
pub mod linear;
pub mod table;

pub use bilinear::interpolate_2d;
pub use linear::{closest_index, interpolate, interpolate_equidistant};
pub use table::{CdfTable, RateTable, TableError};
