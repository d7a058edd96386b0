//! Spatial definition selector.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spatial resolution mode used to pick the voxel size.
///
/// Only two modes exist. Parsing any other name fails with
/// [`Error::UnknownSpatialDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpatialDef {
    /// Coarse voxels.
    Low,
    /// Fine voxels.
    High,
}

impl SpatialDef {
    /// All valid spatial definitions.
    pub const ALL: [SpatialDef; 2] = [SpatialDef::Low, SpatialDef::High];

    /// Lowercase name used in group names and configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SpatialDef::Low => "low",
            SpatialDef::High => "high",
        }
    }
}

impl fmt::Display for SpatialDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpatialDef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(SpatialDef::Low),
            "high" => Ok(SpatialDef::High),
            other => Err(Error::UnknownSpatialDef(other.to_string())),
        }
    }
}
