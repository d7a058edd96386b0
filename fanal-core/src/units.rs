//! System of units.
//!
//! Lengths are expressed in millimetres, times in nanoseconds and energies
//! in MeV. Multiply a number by a unit to express it in the internal system,
//! divide by it to read a value back (`0.002 / KEV == 2.0`).

/// Millimetre (base length unit).
pub const MM: f64 = 1.0;
/// Centimetre.
pub const CM: f64 = 10.0 * MM;
/// Metre.
pub const M: f64 = 1000.0 * MM;

/// Nanosecond (base time unit).
pub const NS: f64 = 1.0;
/// Microsecond.
pub const MUS: f64 = 1000.0 * NS;
/// Millisecond.
pub const MS: f64 = 1000.0 * MUS;
/// Second.
pub const S: f64 = 1000.0 * MS;

/// MeV (base energy unit).
pub const MEV: f64 = 1.0;
/// keV.
pub const KEV: f64 = 1.0e-3 * MEV;
/// eV.
pub const EV: f64 = 1.0e-6 * MEV;
