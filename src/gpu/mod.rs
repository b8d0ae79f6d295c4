//! GPU-facing output of the occlusion octree
//!
//! Record layouts for the three structured buffers, group-size padding, and the
//! hand-off point to whatever uploads them.

pub mod buffer_sink;
pub mod gpu_records;
pub mod padding;
#[cfg(feature = "gpu")]
pub mod wgpu_sink;

pub use buffer_sink::BufferSink;
pub use gpu_records::{GpuOccluder, GpuOctreeNode, GpuVoxel};
pub use padding::{pad_to_group_size, padded_len};
#[cfg(feature = "gpu")]
pub use wgpu_sink::WgpuBufferSink;
