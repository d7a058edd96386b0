#![allow(clippy::float_cmp)]
use fanal_core::units::{MM, MUS};
use fanal_core::McHit;
use fanal_reco::{translate_hit_positions, voxelize_hits, TIME_SPREAD_THRESHOLD};
use proptest::prelude::*;

/// Hits with positions in a 1 m cube and times `t0 + offset`.
fn hits_with_offsets(offsets: Vec<f64>) -> impl Strategy<Value = Vec<McHit>> {
    let n = offsets.len();
    (
        prop::collection::vec(
            (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..1200.0, 0.0f64..3.0),
            n,
        ),
        0u32..1_000_000,
    )
        .prop_map(move |(coords, t0)| {
            coords
                .into_iter()
                .zip(&offsets)
                .map(|((x, y, z, e), offset)| {
                    McHit::new(x, y, z, f64::from(t0) + offset, e)
                })
                .collect()
        })
}

/// Time offsets spanning at most 999 ns.
fn narrow_offsets() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..999.0, 1..64)
}

/// Time offsets containing 0 and one value beyond the threshold.
fn wide_offsets() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(0.0f64..200_000.0, 0..62),
        1001.0f64..200_000.0,
        any::<prop::sample::Index>(),
    )
        .prop_map(|(mut offsets, late, position)| {
            offsets.push(late);
            offsets.insert(position.index(offsets.len() + 1), 0.0);
            offsets
        })
}

proptest! {
    /// Property: within one microsecond the correction is the identity.
    #[test]
    fn narrow_events_keep_positions(
        hits in narrow_offsets().prop_flat_map(hits_with_offsets),
        drift_velocity in 0.0f64..0.01,
    ) {
        let positions = translate_hit_positions(&hits, drift_velocity).unwrap();

        prop_assert_eq!(positions.len(), hits.len());
        for (hit, pos) in hits.iter().zip(&positions) {
            prop_assert_eq!(*pos, (hit.x, hit.y, hit.z));
        }
    }

    /// Property: beyond one microsecond every Z moves by its delay times the
    /// drift velocity, X and Y are untouched and the order is kept.
    #[test]
    fn wide_events_shift_z_by_delay(
        hits in wide_offsets().prop_flat_map(hits_with_offsets),
        drift_velocity in 0.1f64..2.0,
    ) {
        let drift_velocity = drift_velocity * MM / MUS;
        let min_time = hits.iter().map(|h| h.time).fold(f64::INFINITY, f64::min);
        let max_time = hits.iter().map(|h| h.time).fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max_time - min_time > TIME_SPREAD_THRESHOLD);

        let positions = translate_hit_positions(&hits, drift_velocity).unwrap();

        prop_assert_eq!(positions.len(), hits.len());
        for (hit, pos) in hits.iter().zip(&positions) {
            prop_assert_eq!(pos.0, hit.x);
            prop_assert_eq!(pos.1, hit.y);
            prop_assert_eq!(pos.2, hit.z + (hit.time - min_time) * drift_velocity);
        }
    }

    /// Property: voxelization conserves energy and never creates more voxels
    /// than hits.
    #[test]
    fn voxelization_conserves_energy(
        hits in narrow_offsets().prop_flat_map(hits_with_offsets),
        dx in 1.0f64..20.0,
        dz in 1.0f64..20.0,
    ) {
        let positions: Vec<_> = hits.iter().map(|h| (h.x, h.y, h.z)).collect();
        let energies: Vec<_> = hits.iter().map(|h| h.energy).collect();

        let voxels = voxelize_hits(&positions, &energies, (dx, dx, dz)).unwrap();

        let total: f64 = energies.iter().sum();
        let voxel_total: f64 = voxels.iter().map(|v| v.e).sum();
        prop_assert!(!voxels.is_empty() && voxels.len() <= hits.len());
        prop_assert!((total - voxel_total).abs() <= 1e-9 * total.max(1.0));
    }
}
