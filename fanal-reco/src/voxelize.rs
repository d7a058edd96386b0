//! Regular-grid voxelization of hit positions.
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crate::position::{get_voxel_size, translate_hit_positions};
use fanal_core::{Error, Hit, Result, SpatialDef, Voxel};
use std::collections::BTreeMap;

/// Voxel edge lengths `(dx, dy, dz)`.
pub type VoxelSize = (f64, f64, f64);

/// Bins positions into voxels of the given size.
///
/// The grid is anchored at the minimum corner of the bounding box of the
/// positions. Every non-empty cell becomes one voxel placed at the cell
/// center and carrying the summed energy of its hits. Voxels are returned
/// ordered by cell index (x, then y, then z).
///
/// # Errors
/// - [`Error::EmptyInput`] if there are no positions.
/// - [`Error::LengthMismatch`] if `positions` and `energies` differ in length.
/// - [`Error::InvalidVoxelSize`] if any edge length is not finite and positive.
pub fn voxelize_hits(
    positions: &[(f64, f64, f64)],
    energies: &[f64],
    voxel_size: VoxelSize,
) -> Result<Vec<Voxel>> {
    let (dx, dy, dz) = voxel_size;
    if ![dx, dy, dz].iter().all(|d| d.is_finite() && *d > 0.0) {
        return Err(Error::InvalidVoxelSize { dx, dy, dz });
    }
    if positions.len() != energies.len() {
        return Err(Error::LengthMismatch {
            positions: positions.len(),
            energies: energies.len(),
        });
    }
    if positions.is_empty() {
        return Err(Error::EmptyInput("hit positions"));
    }

    let origin = positions.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::INFINITY),
        |(ox, oy, oz), &(x, y, z)| (ox.min(x), oy.min(y), oz.min(z)),
    );

    let cell = |value: f64, start: f64, size: f64| ((value - start) / size).floor() as i64;

    let mut cells: BTreeMap<(i64, i64, i64), f64> = BTreeMap::new();
    for (&(x, y, z), &energy) in positions.iter().zip(energies) {
        let key = (
            cell(x, origin.0, dx),
            cell(y, origin.1, dy),
            cell(z, origin.2, dz),
        );
        *cells.entry(key).or_insert(0.0) += energy;
    }

    let center = |index: i64, start: f64, size: f64| start + (index as f64 + 0.5) * size;

    Ok(cells
        .into_iter()
        .map(|((ix, iy, iz), e)| {
            Voxel::new(
                center(ix, origin.0, dx),
                center(iy, origin.1, dy),
                center(iz, origin.2, dz),
                e,
            )
        })
        .collect())
}

/// Builds the voxels of one event.
///
/// Applies the drift-time correction, then voxelizes the corrected positions
/// with the voxel size of `spatial_def`.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if the event has no hits.
pub fn reconstruct_event<H: Hit>(
    hits: &[H],
    spatial_def: SpatialDef,
    drift_velocity: f64,
) -> Result<Vec<Voxel>> {
    let positions = translate_hit_positions(hits, drift_velocity)?;
    let energies: Vec<f64> = hits.iter().map(H::energy).collect();
    voxelize_hits(&positions, &energies, get_voxel_size(spatial_def))
}
