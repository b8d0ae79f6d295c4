//! Scene Builder Operations
//!
//! One scene load runs: clear store, ingest, build octree, query both passes,
//! pad, hand off. Nothing here outlives the call except the store contents.

use super::scene_builder_data::{SceneBuffers, SceneBuilder};
use super::voxel_source::{validate_dimensions, VoxelSource};
use crate::config::OcclusionConfig;
use crate::error::OcclusionResult;
use crate::geometry::aabb_extent;
use crate::gpu::{pad_to_group_size, padded_len, BufferSink, GpuOccluder};
use crate::octree::{
    build_node_buffers, create_octree, get_stats, insert_voxel, query_best_occluders,
    InsertOutcome, OctreeConfig,
};
use crate::voxel::{append_voxel, clear_store, get_voxel, store_len, voxel_bounds, VoxelRecord};

/// Create a builder after validating its config
pub fn create_scene_builder(config: OcclusionConfig) -> OcclusionResult<SceneBuilder> {
    config.validate()?;
    Ok(SceneBuilder {
        store: Default::default(),
        config,
    })
}

/// Build the occlusion buffers for `source`, replacing any previous scene
pub fn load_scene(
    builder: &mut SceneBuilder,
    source: &dyn VoxelSource,
) -> OcclusionResult<SceneBuffers> {
    let config = builder.config;
    config.validate()?;

    let dimensions = source.dimensions(&config)?;
    validate_dimensions(&dimensions)?;
    let half_scale = aabb_extent(&dimensions.root_bounds) / (2.0 * dimensions.grid_size as f32);

    clear_store(&mut builder.store);
    for position in source.voxel_centers() {
        append_voxel(&mut builder.store, VoxelRecord { position, half_scale });
    }

    let store = &builder.store;
    let octree_config = OctreeConfig {
        max_objects_per_leaf: config.max_objects_per_leaf,
        grid_size: dimensions.grid_size,
        root_bounds: dimensions.root_bounds,
        max_depth: config.max_depth,
    };
    let mut tree = create_octree(store, dimensions.root_bounds, octree_config);

    let mut outside = 0usize;
    let mut overflow = 0usize;
    for handle in 0..store_len(store) {
        let bounds = voxel_bounds(get_voxel(store, handle)?);
        match insert_voxel(&mut tree, handle, &bounds)? {
            InsertOutcome::Stored => {}
            InsertOutcome::Overflow => overflow += 1,
            InsertOutcome::OutsideRoot => outside += 1,
        }
    }
    if outside > 0 {
        log::warn!(
            "{} of {} voxels fell outside the scene root and were dropped",
            outside,
            store_len(store)
        );
    }

    let node_buffers = build_node_buffers(&tree)?;
    let mut occluders = Vec::new();
    query_best_occluders(&tree, &mut occluders);
    let stats = get_stats(&tree);

    let voxel_count = node_buffers.voxels.len();
    let node_count = node_buffers.nodes.len();
    let occluder_count = occluders.len();
    stamp_occluder_count(&mut occluders);

    let group_size = config.group_size as usize;
    let mut voxels = node_buffers.voxels;
    let mut nodes = node_buffers.nodes;
    pad_to_group_size(&mut voxels, group_size);
    pad_to_group_size(&mut nodes, group_size);
    pad_to_group_size(&mut occluders, group_size);

    log::info!(
        "Loaded occlusion scene: {} voxels, {} nodes ({} leaves, depth {}), {} occluders, {} overflow",
        voxel_count,
        node_count,
        stats.leaf_nodes,
        stats.max_depth,
        occluder_count,
        overflow
    );

    Ok(SceneBuffers {
        voxels,
        nodes,
        occluders,
        voxel_count,
        node_count,
        occluder_count,
        node_task_count: task_count(node_count, group_size),
        occluder_task_count: task_count(occluder_count, group_size),
        dimensions,
        stats,
    })
}

/// Hand the padded buffers to the rendering layer
pub fn bind_scene_buffers(buffers: &SceneBuffers, sink: &mut impl BufferSink) -> OcclusionResult<()> {
    sink.bind_voxel_buffer(&buffers.voxels)?;
    sink.bind_octree_node_buffer(&buffers.nodes)?;
    sink.bind_best_occluder_buffer(&buffers.occluders)?;
    Ok(())
}

fn stamp_occluder_count(occluders: &mut [GpuOccluder]) {
    let count = occluders.len() as u32;
    for occluder in occluders.iter_mut() {
        occluder.best_occluder_count = count;
    }
}

fn task_count(len: usize, group_size: usize) -> u32 {
    (padded_len(len, group_size) / group_size) as u32
}
