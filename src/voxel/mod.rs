//! Voxel store
//!
//! The append-only list of voxels for the current scene. Octree nodes refer to
//! voxels only by handle; this store is the one place that knows where voxel
//! `i` is.

pub mod voxel_store_data;
pub mod voxel_store_operations;

pub use voxel_store_data::{VoxelHandle, VoxelRecord, VoxelStore};
pub use voxel_store_operations::{
    append_voxel, clear_store, create_voxel_store, get_voxel, store_is_empty, store_len,
    voxel_bounds, voxel_center_and_scale,
};
