//! Occlusion Octree Queries
//!
//! Two passes produce the GPU buffers:
//! - `query_all_nodes` walks bottom-up and lays the voxels out CSR-style: one
//!   contiguous run per node in the ordered voxel buffer, described by a
//!   `[start, count)` node record.
//! - `query_best_occluders` walks top-down and stops at the first full node on
//!   each path, so a packed region is reported once as a single coarse box.

use super::octree_data::{Octree, OctreeConfig, OctreeNode};
use super::octree_operations::is_full;
use crate::error::{OcclusionError, OcclusionResult};
use crate::geometry::aabb_center_and_scale;
use crate::gpu::{GpuOccluder, GpuOctreeNode, GpuVoxel};
use crate::voxel::{get_voxel, store_len, voxel_center_and_scale, VoxelStore};
use bit_vec::BitVec;

/// Ordered voxel buffer plus the node records indexing it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeBuffers {
    pub voxels: Vec<GpuVoxel>,
    pub nodes: Vec<GpuOctreeNode>,
}

/// Bottom-up pass appending to the caller's buffers
///
/// `dedup_mask` has one bit per voxel in the store. A handle already marked is
/// skipped, so no voxel is written twice even if it were referenced by more
/// than one node. Node records count only the voxels actually written, and
/// nodes that write nothing are omitted.
pub fn query_all_nodes(
    tree: &Octree<'_>,
    ordered_voxels: &mut Vec<GpuVoxel>,
    dedup_mask: &mut BitVec,
    out_nodes: &mut Vec<GpuOctreeNode>,
) -> OcclusionResult<()> {
    collect_nodes(&tree.root, tree.store, ordered_voxels, dedup_mask, out_nodes)
}

/// Run `query_all_nodes` with fresh buffers and a fresh dedup mask
pub fn build_node_buffers(tree: &Octree<'_>) -> OcclusionResult<NodeBuffers> {
    let voxel_count = store_len(tree.store);
    let mut buffers = NodeBuffers {
        voxels: Vec::with_capacity(voxel_count),
        nodes: Vec::with_capacity(voxel_count / 2),
    };
    let mut dedup_mask = BitVec::from_elem(voxel_count, false);
    query_all_nodes(tree, &mut buffers.voxels, &mut dedup_mask, &mut buffers.nodes)?;
    Ok(buffers)
}

fn collect_nodes(
    node: &OctreeNode,
    store: &VoxelStore,
    ordered_voxels: &mut Vec<GpuVoxel>,
    dedup_mask: &mut BitVec,
    out_nodes: &mut Vec<GpuOctreeNode>,
) -> OcclusionResult<()> {
    // Children first: their runs precede the parent's own run.
    for child in node.children.iter().flatten() {
        collect_nodes(child, store, ordered_voxels, dedup_mask, out_nodes)?;
    }

    let start = ordered_voxels.len();
    for &handle in &node.handles {
        let seen = dedup_mask.get(handle).ok_or(OcclusionError::OutOfRange {
            handle,
            len: dedup_mask.len(),
        })?;
        if seen {
            continue;
        }

        let voxel = get_voxel(store, handle)?;
        ordered_voxels.push(GpuVoxel::new(voxel_center_and_scale(voxel)));
        dedup_mask.set(handle, true);
    }

    let count = ordered_voxels.len() - start;
    if count > 0 {
        out_nodes.push(GpuOctreeNode::new(
            aabb_center_and_scale(&node.bounds),
            start as u32,
            count as u32,
        ));
    }

    Ok(())
}

/// Top-down pass collecting maximal full nodes
///
/// The root is treated as the only child of a synthetic parent, so a tree whose
/// root is already full yields exactly one occluder covering the root.
/// An empty result is valid and means there is no pre-pass geometry.
pub fn query_best_occluders(tree: &Octree<'_>, out_occluders: &mut Vec<GpuOccluder>) {
    if is_full(&tree.root, &tree.config) {
        out_occluders.push(GpuOccluder::new(aabb_center_and_scale(&tree.root.bounds)));
        return;
    }
    collect_occluders(&tree.root, &tree.config, out_occluders);
}

fn collect_occluders(node: &OctreeNode, config: &OctreeConfig, out_occluders: &mut Vec<GpuOccluder>) {
    for child in node.children.iter().flatten() {
        if is_full(child, config) {
            out_occluders.push(GpuOccluder::new(aabb_center_and_scale(&child.bounds)));
            continue;
        }
        collect_occluders(child, config, out_occluders);
    }
}
