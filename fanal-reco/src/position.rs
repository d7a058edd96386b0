//! Voxel sizes and drift-time position correction.

use fanal_core::units::{MM, MUS};
use fanal_core::{Error, Hit, Result, SpatialDef};

/// Events whose hits spread over more than this time get their Z corrected.
pub const TIME_SPREAD_THRESHOLD: f64 = 1.0 * MUS;

/// Returns the `(dx, dy, dz)` voxel edge lengths for a spatial definition.
#[must_use]
pub fn get_voxel_size(spatial_def: SpatialDef) -> (f64, f64, f64) {
    match spatial_def {
        SpatialDef::Low => (10.0 * MM, 10.0 * MM, 5.0 * MM),
        SpatialDef::High => (2.0 * MM, 2.0 * MM, 2.0 * MM),
    }
}

/// Corrects hit Z positions for late deposits.
///
/// All the hits of a simulated event share one event, but some of them can
/// arrive long after the first deposit and would be reconstructed at a
/// shifted Z. If the time spread of the event exceeds
/// [`TIME_SPREAD_THRESHOLD`], every hit is moved by
/// `(time - min_time) * drift_velocity`. Otherwise positions pass through.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `hits` is empty.
pub fn translate_hit_positions<H: Hit>(
    hits: &[H],
    drift_velocity: f64,
) -> Result<Vec<(f64, f64, f64)>> {
    if hits.is_empty() {
        return Err(Error::EmptyInput("hits"));
    }

    let (min_time, max_time) = hits.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), hit| (lo.min(hit.time()), hi.max(hit.time())),
    );

    if max_time - min_time > TIME_SPREAD_THRESHOLD {
        log::trace!(
            "time spread {:.1} ns above threshold, shifting {} hits",
            max_time - min_time,
            hits.len()
        );
        Ok(hits
            .iter()
            .map(|hit| {
                (
                    hit.x(),
                    hit.y(),
                    hit.z() + (hit.time() - min_time) * drift_velocity,
                )
            })
            .collect())
    } else {
        Ok(hits.iter().map(H::position).collect())
    }
}
