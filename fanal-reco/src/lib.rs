//! fanal-reco: Event reconstruction helpers.
//!
//! - [`get_voxel_size`] - voxel edge lengths for a [`SpatialDef`]
//! - [`translate_hit_positions`] - drift-time correction of delayed hits
//! - [`voxelize_hits`] - regular-grid binning of hit positions into voxels
//! - [`reconstruct_event`] - the three steps above chained together
//!
#![warn(missing_docs)]

mod position;
mod voxelize;

pub use position::{get_voxel_size, translate_hit_positions, TIME_SPREAD_THRESHOLD};
pub use voxelize::{reconstruct_event, voxelize_hits, VoxelSize};

// Re-export core types used in the public signatures
pub use fanal_core::{Hit, SpatialDef, Voxel};
