#![allow(clippy::float_cmp)]
use fanal_ana::check_event_fiduciality;
use fanal_core::{VolumeDim, Voxel};
use proptest::prelude::*;

fn volume() -> VolumeDim {
    VolumeDim::new(20.0, 1180.0, 480.0)
}

/// Voxels anywhere around the detector, inside or out.
fn any_voxels() -> impl Strategy<Value = Vec<Voxel>> {
    prop::collection::vec(
        (-600.0f64..600.0, -600.0f64..600.0, -100.0f64..1300.0, 0.0f64..0.05),
        1..64,
    )
    .prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y, z, e)| Voxel::new(x, y, z, e))
            .collect()
    })
}

/// Voxels strictly inside `volume()`.
fn contained_voxels() -> impl Strategy<Value = Vec<Voxel>> {
    prop::collection::vec(
        (
            0.0f64..479.0,
            0.0f64..std::f64::consts::TAU,
            21.0f64..1179.0,
            0.0f64..3.0,
        ),
        1..64,
    )
    .prop_map(|coords| {
        coords
            .into_iter()
            .map(|(r, phi, z, e)| Voxel::new(r * phi.cos(), r * phi.sin(), z, e))
            .collect()
    })
}

proptest! {
    /// Property: the reported extrema match an independent computation.
    #[test]
    fn extrema_match_independent_computation(voxels in any_voxels(), threshold in 0.0f64..0.5) {
        let summary = check_event_fiduciality(&voxels, &volume(), threshold).unwrap();

        let max_rad = voxels
            .iter()
            .map(|v| (v.x * v.x + v.y * v.y).sqrt())
            .fold(f64::NEG_INFINITY, f64::max);
        let min_z = voxels.iter().map(|v| v.z).fold(f64::INFINITY, f64::min);
        let max_z = voxels.iter().map(|v| v.z).fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(summary.max_rad, max_rad);
        prop_assert_eq!(summary.min_z, min_z);
        prop_assert_eq!(summary.max_z, max_z);
    }

    /// Property: contained events are fiducial with no veto energy, whatever
    /// the threshold.
    #[test]
    fn contained_events_are_fiducial(voxels in contained_voxels(), threshold in 0.0f64..10.0) {
        let summary = check_event_fiduciality(&voxels, &volume(), threshold).unwrap();

        prop_assert!(summary.in_volume);
        prop_assert!(summary.is_fiducial);
        prop_assert_eq!(summary.veto_energy, 0.0);
    }

    /// Property: the geometric filter is strict, the veto energy sums the
    /// voxels strictly outside, and the threshold decides the rest.
    #[test]
    fn veto_energy_and_threshold_rules(voxels in any_voxels(), threshold in 0.0f64..0.5) {
        let vol = volume();
        let summary = check_event_fiduciality(&voxels, &vol, threshold).unwrap();

        let in_volume = voxels.iter().all(|v| {
            v.z > vol.z_min && v.z < vol.z_max && (v.x * v.x + v.y * v.y).sqrt() < vol.rad
        });
        let veto_energy: f64 = if in_volume {
            0.0
        } else {
            voxels
                .iter()
                .filter(|v| {
                    v.z < vol.z_min
                        || v.z > vol.z_max
                        || (v.x * v.x + v.y * v.y).sqrt() > vol.rad
                })
                .map(|v| v.e)
                .sum()
        };

        prop_assert_eq!(summary.in_volume, in_volume);
        prop_assert_eq!(summary.veto_energy, veto_energy);
        prop_assert_eq!(summary.is_fiducial, in_volume || veto_energy < threshold);
        prop_assert_eq!(summary.is_rescued(), !in_volume && veto_energy < threshold);
    }
}
