//! Fiducial volume dimensions.

use crate::error::{Error, Result};
use crate::units::MM;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axially symmetric cylinder `z_min < z < z_max`, `sqrt(x^2 + y^2) < rad`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeDim {
    /// Lower Z bound (mm).
    pub z_min: f64,
    /// Upper Z bound (mm).
    pub z_max: f64,
    /// Radial limit (mm).
    pub rad: f64,
}

impl Default for VolumeDim {
    fn default() -> Self {
        // Active volume shrunk by a 20 mm veto layer on every side
        Self {
            z_min: 20.0 * MM,
            z_max: 1180.0 * MM,
            rad: 480.0 * MM,
        }
    }
}

impl VolumeDim {
    /// Creates a new volume descriptor.
    #[must_use]
    pub fn new(z_min: f64, z_max: f64, rad: f64) -> Self {
        Self { z_min, z_max, rad }
    }

    /// Checks that the bounds describe a non-empty cylinder.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVolume`] for non-finite bounds, `z_min >= z_max`
    /// or a non-positive radius.
    pub fn validate(&self) -> Result<()> {
        if !(self.z_min.is_finite() && self.z_max.is_finite() && self.rad.is_finite()) {
            return Err(Error::InvalidVolume(format!(
                "bounds must be finite, got {:?}",
                self
            )));
        }
        if self.z_min >= self.z_max {
            return Err(Error::InvalidVolume(format!(
                "z_min ({}) must be below z_max ({})",
                self.z_min, self.z_max
            )));
        }
        if self.rad <= 0.0 {
            return Err(Error::InvalidVolume(format!(
                "radius must be positive, got {}",
                self.rad
            )));
        }
        Ok(())
    }

    /// Returns true if the point lies strictly beyond one of the bounds.
    ///
    /// Points exactly on a boundary are neither inside nor outside.
    #[inline]
    #[must_use]
    pub fn is_outside(&self, x: f64, y: f64, z: f64) -> bool {
        z < self.z_min || z > self.z_max || (x * x + y * y).sqrt() > self.rad
    }
}
