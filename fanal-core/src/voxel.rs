//! Voxel type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An aggregated spatial bin carrying the energy of the hits it contains.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Voxel {
    /// X center (mm).
    pub x: f64,
    /// Y center (mm).
    pub y: f64,
    /// Z center (mm).
    pub z: f64,
    /// Accumulated energy (MeV).
    pub e: f64,
}

impl Voxel {
    /// Creates a new voxel.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, e: f64) -> Self {
        Self { x, y, z, e }
    }

    /// Distance to the detector axis, `sqrt(x^2 + y^2)`.
    #[inline]
    #[must_use]
    pub fn rad(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
