//! Occlusion Octree Data
//!
//! Plain data for the tree. Insertion lives in octree_operations.rs, the two
//! buffer-producing passes in octree_query.rs.

use crate::constants::OCTANT_COUNT;
use crate::geometry::Aabb;
use crate::voxel::{VoxelHandle, VoxelStore};

/// Root-level settings shared by every node of one tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctreeConfig {
    /// Leaf capacity before a split
    pub max_objects_per_leaf: u32,
    /// Cells per axis of the source grid
    pub grid_size: u32,
    /// Bounds of the whole source grid. Kept apart from the root node's bounds
    /// so voxel size never has to be re-derived from depth.
    pub root_bounds: Aabb,
    /// Deepest level a full leaf may split to
    pub max_depth: u32,
}

/// One node of the occlusion octree
///
/// A node is a leaf until its first split and internal forever after. Children
/// are exclusively owned; only octants that ever received a voxel exist.
#[derive(Debug)]
pub struct OctreeNode {
    pub bounds: Aabb,
    pub is_leaf: bool,
    pub children: [Option<Box<OctreeNode>>; OCTANT_COUNT],
    /// Voxels held directly by this node. On a leaf this is its contents; on an
    /// internal node it only ever holds overflow handles that matched no octant.
    pub handles: Vec<VoxelHandle>,
}

/// Occlusion octree over a borrowed voxel store
///
/// The store cannot be cleared or appended to while a tree borrowing it is
/// alive, so every handle in the tree stays valid for the tree's lifetime.
pub struct Octree<'store> {
    pub store: &'store VoxelStore,
    pub config: OctreeConfig,
    pub root: OctreeNode,
}

/// Where an inserted handle ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Stored on a leaf
    Stored,
    /// Center matched no child octant of an internal node; stored on that node
    Overflow,
    /// Center lies outside the root bounds; not stored
    OutsideRoot,
}

/// Octree statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OctreeStats {
    pub total_nodes: u32,
    pub leaf_nodes: u32,
    pub internal_nodes: u32,
    /// Deepest level reached, root = 0
    pub max_depth: u32,
    /// Handles referenced anywhere in the tree
    pub stored_handles: u32,
    /// Handles parked on internal nodes
    pub overflow_handles: u32,
    pub memory_usage_mb: f32,
}
