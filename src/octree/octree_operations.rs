//! Occlusion Octree Operations
//!
//! Construction, insertion and the fullness predicates. Containment is always
//! tested against a voxel's center point, never its full box: a voxel whose box
//! straddles an octant boundary belongs to the single octant holding its
//! center, and on a shared face the lowest octant index wins.

use super::octree_data::{InsertOutcome, Octree, OctreeConfig, OctreeNode, OctreeStats};
use crate::error::OcclusionResult;
use crate::geometry::{aabb_center, aabb_contains_point, aabb_extent, aabb_octant, Aabb};
use crate::voxel::{get_voxel, VoxelHandle, VoxelStore};
use glam::Vec3;

/// Create an empty leaf
pub fn create_octree_node(bounds: Aabb) -> OctreeNode {
    OctreeNode {
        bounds,
        is_leaf: true,
        children: Default::default(),
        handles: Vec::new(),
    }
}

/// Create a tree with an empty root leaf covering `bounds`
pub fn create_octree(store: &VoxelStore, bounds: Aabb, config: OctreeConfig) -> Octree<'_> {
    debug_assert!(
        (bounds.max - bounds.min).abs_diff_eq(Vec3::splat(aabb_extent(&bounds)), 1e-3),
        "octree bounds must be a cube: {:?}",
        bounds
    );
    Octree {
        store,
        config,
        root: create_octree_node(bounds),
    }
}

/// Absolute voxel size derived from the root grid, independent of depth
pub fn voxel_size(config: &OctreeConfig) -> f32 {
    aabb_extent(&config.root_bounds) / (2.0 * config.grid_size as f32)
}

/// Lowest-index octant of `bounds` containing `point`
pub fn find_octant(bounds: &Aabb, point: Vec3) -> Option<(usize, Aabb)> {
    (0..8)
        .map(|octant| (octant, aabb_octant(bounds, octant)))
        .find(|(_, octant_bounds)| aabb_contains_point(octant_bounds, point))
}

fn child_or_insert(node: &mut OctreeNode, octant: usize, bounds: Aabb) -> &mut OctreeNode {
    node.children[octant].get_or_insert_with(|| Box::new(create_octree_node(bounds)))
}

/// Turn a leaf into an internal node, moving its handles into the octants that
/// contain their centers. Handles matching no octant stay on the node.
pub fn split_node(node: &mut OctreeNode, store: &VoxelStore) -> OcclusionResult<()> {
    if !node.is_leaf {
        return Ok(());
    }

    // Resolve every center before touching the node so a bad handle leaves it intact.
    let centers = node
        .handles
        .iter()
        .map(|&handle| get_voxel(store, handle).map(|voxel| (handle, voxel.position)))
        .collect::<OcclusionResult<Vec<_>>>()?;

    node.is_leaf = false;
    node.handles.clear();

    for (handle, center) in centers {
        match find_octant(&node.bounds, center) {
            Some((octant, bounds)) => child_or_insert(node, octant, bounds).handles.push(handle),
            None => node.handles.push(handle),
        }
    }

    Ok(())
}

/// Insert a voxel handle, splitting full leaves on the way down
///
/// Descent is iterative. A center outside the root is rejected without being
/// stored; that only happens when the caller sized the root wrong.
pub fn insert_voxel(
    tree: &mut Octree<'_>,
    handle: VoxelHandle,
    object_bounds: &Aabb,
) -> OcclusionResult<InsertOutcome> {
    let store = tree.store;
    get_voxel(store, handle)?;

    let center = aabb_center(object_bounds);
    if !aabb_contains_point(&tree.root.bounds, center) {
        log::warn!(
            "Voxel {} at {:?} lies outside octree root {:?}, not inserted",
            handle,
            center,
            tree.root.bounds
        );
        return Ok(InsertOutcome::OutsideRoot);
    }

    let capacity = tree.config.max_objects_per_leaf as usize;
    let max_depth = tree.config.max_depth;
    let mut node = &mut tree.root;
    let mut depth = 0;

    loop {
        if node.is_leaf {
            if node.handles.len() < capacity || depth >= max_depth {
                node.handles.push(handle);
                return Ok(InsertOutcome::Stored);
            }

            split_node(node, store)?;
            log::debug!(
                "Split node at depth {} with bounds {:?}",
                depth,
                node.bounds
            );
        }

        match find_octant(&node.bounds, center) {
            Some((octant, bounds)) => {
                node = child_or_insert(node, octant, bounds);
                depth += 1;
            }
            None => {
                log::debug!(
                    "Voxel {} matched no octant of {:?}, storing on internal node",
                    handle,
                    node.bounds
                );
                node.handles.push(handle);
                return Ok(InsertOutcome::Overflow);
            }
        }
    }
}

/// A leaf is tight when its side is no longer than the tightest packing of
/// `max_objects_per_leaf` voxels would need.
pub fn is_tight(node: &OctreeNode, config: &OctreeConfig) -> bool {
    let packed_side = 2.0 * voxel_size(config) * (config.max_objects_per_leaf as f32).cbrt();
    aabb_extent(&node.bounds) <= packed_side.ceil()
}

/// Full leaf: at capacity and tight. Full internal node: all eight children
/// exist and are full.
pub fn is_full(node: &OctreeNode, config: &OctreeConfig) -> bool {
    if node.is_leaf {
        return node.handles.len() >= config.max_objects_per_leaf as usize && is_tight(node, config);
    }

    node.children
        .iter()
        .all(|child| child.as_deref().map_or(false, |child| is_full(child, config)))
}

/// Get octree statistics
pub fn get_stats(tree: &Octree<'_>) -> OctreeStats {
    let mut stats = OctreeStats::default();
    accumulate_stats(&tree.root, 0, &mut stats);

    let node_bytes = stats.total_nodes as f32 * std::mem::size_of::<OctreeNode>() as f32;
    let handle_bytes = stats.stored_handles as f32 * std::mem::size_of::<VoxelHandle>() as f32;
    stats.memory_usage_mb = (node_bytes + handle_bytes) / (1024.0 * 1024.0);
    stats
}

fn accumulate_stats(node: &OctreeNode, depth: u32, stats: &mut OctreeStats) {
    stats.total_nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);
    stats.stored_handles += node.handles.len() as u32;

    if node.is_leaf {
        stats.leaf_nodes += 1;
    } else {
        stats.internal_nodes += 1;
        stats.overflow_handles += node.handles.len() as u32;
    }

    for child in node.children.iter().flatten() {
        accumulate_stats(child, depth + 1, stats);
    }
}
