// Voxel Occlusion - Data-Oriented Programming (DOP) Architecture
//
// A sparse octree over voxelized scene geometry, built once per scene load and
// queried for two GPU inputs:
// - a CSR-style ordered voxel buffer plus node records, for per-node culling
// - the maximal fully packed regions, drawn as a coarse depth pre-pass
//
// Data lives in *_data modules, transformations in *_operations modules.

// Constants module
pub mod constants;

// Core
pub mod config;
pub mod error;
pub mod geometry;
pub mod voxel;
pub mod octree;

// GPU-facing output
pub mod gpu;

// Scene loading
pub mod scene;

pub use config::OcclusionConfig;
pub use error::{ErrorContext, OcclusionError, OcclusionResult};
pub use geometry::Aabb;
pub use gpu::{BufferSink, GpuOccluder, GpuOctreeNode, GpuVoxel};
#[cfg(feature = "gpu")]
pub use gpu::WgpuBufferSink;
pub use octree::{InsertOutcome, Octree, OctreeConfig, OctreeNode, OctreeStats};
pub use scene::{
    bind_scene_buffers, create_scene_builder, load_scene, DenseVoxelGrid, GridDimensions,
    PointCloud, SceneBuffers, SceneBuilder, VoxelSource,
};
pub use voxel::{VoxelHandle, VoxelRecord, VoxelStore};
