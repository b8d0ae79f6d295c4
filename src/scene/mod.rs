//! Scene loading
//!
//! Turns a voxel source into the padded GPU buffers for one scene.

pub mod scene_builder_data;
pub mod scene_builder_operations;
pub mod voxel_source;

pub use scene_builder_data::{SceneBuffers, SceneBuilder};
pub use scene_builder_operations::{bind_scene_buffers, create_scene_builder, load_scene};
pub use voxel_source::{validate_dimensions, DenseVoxelGrid, GridDimensions, PointCloud, VoxelSource};
