//! fanal-core: Core types for Monte-Carlo event analysis.
//!
//! This crate provides the value types shared by the reconstruction and
//! analysis crates: Monte-Carlo hits and events, voxels, the spatial
//! definition selector, fiducial volume dimensions and the unit system.
//!

pub mod error;
pub mod hit;
pub mod spatial;
pub mod units;
pub mod volume;
pub mod voxel;

pub use error::{Error, Result};
pub use hit::{Hit, McEvent, McHit};
pub use spatial::SpatialDef;
pub use volume::VolumeDim;
pub use voxel::Voxel;
