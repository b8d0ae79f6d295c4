use super::gpu_records::{GpuOccluder, GpuOctreeNode, GpuVoxel};
use crate::error::OcclusionResult;

/// Rendering-side consumer of the three structured buffers
///
/// Buffers arrive already padded to the group size. Implementations decide how
/// to upload them; the octree never talks to a graphics API directly.
pub trait BufferSink {
    fn bind_voxel_buffer(&mut self, voxels: &[GpuVoxel]) -> OcclusionResult<()>;
    fn bind_octree_node_buffer(&mut self, nodes: &[GpuOctreeNode]) -> OcclusionResult<()>;
    fn bind_best_occluder_buffer(&mut self, occluders: &[GpuOccluder]) -> OcclusionResult<()>;
}
