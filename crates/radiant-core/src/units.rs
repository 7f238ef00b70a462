//! SI unit constants.
//!
//! All quantities inside Radiant are SI: metres, seconds, joules, tesla,
//! kilograms, coulomb. Multiply by a constant to convert into internal
//! units, divide to convert out.

/// Speed of light in vacuum \[m/s\].
pub const C_LIGHT: f64 = 299_792_458.0;
/// Square of the speed of light \[m²/s²\].
pub const C_SQUARED: f64 = C_LIGHT * C_LIGHT;
/// Elementary charge \[C\].
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_487e-19;
/// Planck constant \[J s\].
pub const H_PLANCK: f64 = 6.626_069_57e-34;

/// Atomic mass unit \[kg\].
pub const AMU: f64 = 1.660_538_921e-27;
/// Proton rest mass \[kg\].
pub const MASS_PROTON: f64 = 1.672_621_777e-27;
/// Neutron rest mass \[kg\].
pub const MASS_NEUTRON: f64 = 1.674_927_351e-27;
/// Electron rest mass \[kg\].
pub const MASS_ELECTRON: f64 = 9.109_382_91e-31;

/// Electron volt \[J\].
pub const EV: f64 = ELEMENTARY_CHARGE;
/// Kilo electron volt \[J\].
pub const KEV: f64 = 1e3 * EV;
/// Mega electron volt \[J\].
pub const MEV: f64 = 1e6 * EV;
/// Giga electron volt \[J\].
pub const GEV: f64 = 1e9 * EV;
/// Exa electron volt \[J\].
pub const EEV: f64 = 1e18 * EV;

/// Tesla.
pub const TESLA: f64 = 1.0;
/// Gauss \[T\].
pub const GAUSS: f64 = 1e-4 * TESLA;
/// Micro gauss \[T\].
pub const MICRO_GAUSS: f64 = 1e-6 * GAUSS;
/// Nano gauss \[T\].
pub const NANO_GAUSS: f64 = 1e-9 * GAUSS;

/// Metre.
pub const METER: f64 = 1.0;
/// Kilometre \[m\].
pub const KILOMETER: f64 = 1e3 * METER;
/// Parsec \[m\].
pub const PARSEC: f64 = 3.085_677_581_3e16 * METER;
/// Kiloparsec \[m\].
pub const KPC: f64 = 1e3 * PARSEC;
/// Megaparsec \[m\].
pub const MPC: f64 = 1e6 * PARSEC;
/// Gigaparsec \[m\].
pub const GPC: f64 = 1e9 * PARSEC;
