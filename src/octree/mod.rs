//! Occlusion octree
//!
//! A sparse octree over voxel handles. Built once per scene load, then queried
//! for the two GPU-facing outputs: the CSR-style voxel/node buffers used for
//! per-node culling, and the best-occluder list used for the depth pre-pass.

pub mod octree_data;
pub mod octree_operations;
pub mod octree_query;


pub use octree_data::{InsertOutcome, Octree, OctreeConfig, OctreeNode, OctreeStats};
pub use octree_operations::{
    create_octree, create_octree_node, find_octant, get_stats, insert_voxel, is_full, is_tight,
    split_node, voxel_size,
};
pub use octree_query::{build_node_buffers, query_all_nodes, query_best_occluders, NodeBuffers};
