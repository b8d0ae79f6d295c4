//! Voxel Store Operations - Pure DOP Functions

use super::voxel_store_data::{VoxelHandle, VoxelRecord, VoxelStore};
use crate::error::{OcclusionError, OcclusionResult};
use crate::geometry::{aabb_from_center_half_extent, Aabb};
use glam::Vec4;

/// Create an empty store sized for `capacity` voxels
pub fn create_voxel_store(capacity: usize) -> VoxelStore {
    VoxelStore {
        records: Vec::with_capacity(capacity),
    }
}

/// Append a voxel and return its handle (the new length minus one)
pub fn append_voxel(store: &mut VoxelStore, voxel: VoxelRecord) -> VoxelHandle {
    store.records.push(voxel);
    store.records.len() - 1
}

/// Look up a voxel by handle
pub fn get_voxel(store: &VoxelStore, handle: VoxelHandle) -> OcclusionResult<&VoxelRecord> {
    store.records.get(handle).ok_or(OcclusionError::OutOfRange {
        handle,
        len: store.records.len(),
    })
}

/// Drop every voxel. Handles issued before this call are invalid afterwards.
pub fn clear_store(store: &mut VoxelStore) {
    store.records.clear();
}

pub fn store_len(store: &VoxelStore) -> usize {
    store.records.len()
}

pub fn store_is_empty(store: &VoxelStore) -> bool {
    store.records.is_empty()
}

/// Cubic bounds of a voxel
pub fn voxel_bounds(voxel: &VoxelRecord) -> Aabb {
    aabb_from_center_half_extent(voxel.position, voxel.half_scale)
}

/// GPU layout of a voxel: center in xyz, half-scale in w
pub fn voxel_center_and_scale(voxel: &VoxelRecord) -> Vec4 {
    voxel.position.extend(voxel.half_scale)
}
