//! Build-wide constants for the occlusion octree and its GPU buffers.

/// Default leaf capacity before a node splits into octants.
pub const DEFAULT_MAX_OBJECTS_PER_LEAF: u32 = 64;

/// GPU execution group size; every uploaded buffer is a multiple of this.
pub const DEFAULT_GROUP_SIZE: u32 = 64;

/// Deepest level a leaf may split to.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Padding (in voxels) added around point-cloud bounds.
pub const DEFAULT_ROOT_PADDING_VOXELS: f32 = 2.0;

/// Number of octants per node
pub const OCTANT_COUNT: usize = 8;
