//! Scene Builder Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in scene_builder_operations.rs

use super::voxel_source::GridDimensions;
use crate::config::OcclusionConfig;
use crate::gpu::{GpuOccluder, GpuOctreeNode, GpuVoxel};
use crate::octree::OctreeStats;
use crate::voxel::VoxelStore;

/// Owns the voxel store across scene loads
///
/// Each load clears the store and rebuilds the octree from scratch; the tree
/// itself only lives for the duration of the load.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    pub store: VoxelStore,
    pub config: OcclusionConfig,
}

/// Everything the renderer needs from one scene load
///
/// The three buffers are already padded to the group size. The `*_count`
/// fields hold the real element counts before padding.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBuffers {
    pub voxels: Vec<GpuVoxel>,
    pub nodes: Vec<GpuOctreeNode>,
    pub occluders: Vec<GpuOccluder>,
    pub voxel_count: usize,
    pub node_count: usize,
    pub occluder_count: usize,
    /// Execution groups needed to cover the node buffer
    pub node_task_count: u32,
    /// Execution groups needed to cover the occluder buffer
    pub occluder_task_count: u32,
    pub dimensions: GridDimensions,
    pub stats: OctreeStats,
}
