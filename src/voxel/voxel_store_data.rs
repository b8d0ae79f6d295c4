//! Voxel Store Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in voxel_store_operations.rs

use glam::Vec3;

/// Stable voxel identifier: the voxel's insertion index in its store
pub type VoxelHandle = usize;

/// One occupied grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelRecord {
    /// Cell center
    pub position: Vec3,
    /// Half the cell's side length
    pub half_scale: f32,
}

/// Append-only voxel storage for one scene load
///
/// Not thread-safe. Filled once during ingestion, then read by the octree for
/// as long as the octree borrows it.
#[derive(Debug, Default)]
pub struct VoxelStore {
    pub records: Vec<VoxelRecord>,
}
