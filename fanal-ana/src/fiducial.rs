//! Fiducial event selection.

use fanal_core::{Error, Result, VolumeDim, Voxel};
use serde::Serialize;

/// Outcome of the fiduciality check of one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiducialSummary {
    /// Lowest voxel Z.
    pub min_z: f64,
    /// Highest voxel Z.
    pub max_z: f64,
    /// Largest voxel distance to the axis.
    pub max_rad: f64,
    /// Energy deposited in the veto region (0 when every voxel is inside).
    pub veto_energy: f64,
    /// Whether all voxels passed the strict geometric filter.
    pub in_volume: bool,
    /// Final decision.
    pub is_fiducial: bool,
}

impl FiducialSummary {
    /// True for events that failed the geometric filter but leaked less
    /// energy than the veto threshold.
    #[must_use]
    pub fn is_rescued(&self) -> bool {
        self.is_fiducial && !self.in_volume
    }

    /// `(min_z, max_z, max_rad, veto_energy, is_fiducial)`.
    #[must_use]
    pub fn into_tuple(self) -> (f64, f64, f64, f64, bool) {
        (
            self.min_z,
            self.max_z,
            self.max_rad,
            self.veto_energy,
            self.is_fiducial,
        )
    }
}

/// Checks whether an event is fiducial.
///
/// The event is inside the volume when `min_z > z_min`, `max_z < z_max` and
/// `max_rad < rad`. Otherwise the energy of the voxels with `z < z_min`,
/// `z > z_max` or radius `> rad` is summed as veto energy, and the event is
/// still accepted if that energy is below `min_veto_e`.
///
/// Voxels sitting exactly on a boundary fail the geometric filter but do not
/// contribute veto energy.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `event_voxels` is empty.
pub fn check_event_fiduciality(
    event_voxels: &[Voxel],
    fid_dimensions: &VolumeDim,
    min_veto_e: f64,
) -> Result<FiducialSummary> {
    if event_voxels.is_empty() {
        return Err(Error::EmptyInput("voxels"));
    }

    let (min_z, max_z, max_rad) = event_voxels.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(lo, hi, rad), voxel| (lo.min(voxel.z), hi.max(voxel.z), rad.max(voxel.rad())),
    );

    let in_volume = min_z > fid_dimensions.z_min
        && max_z < fid_dimensions.z_max
        && max_rad < fid_dimensions.rad;

    let veto_energy = if in_volume {
        0.0
    } else {
        event_voxels
            .iter()
            .filter(|voxel| fid_dimensions.is_outside(voxel.x, voxel.y, voxel.z))
            .map(|voxel| voxel.e)
            .sum()
    };

    Ok(FiducialSummary {
        min_z,
        max_z,
        max_rad,
        veto_energy,
        in_volume,
        is_fiducial: in_volume || veto_energy < min_veto_e,
    })
}
