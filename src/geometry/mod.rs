//! Bounding-volume utilities
//!
//! Pure, stateless geometry shared by the voxel store and the octree.

pub mod aabb;

pub use aabb::{
    aabb_center, aabb_center_and_scale, aabb_contains_point, aabb_extent,
    aabb_from_center_half_extent, aabb_half_extent, aabb_intersects, aabb_octant, create_aabb,
    Aabb,
};
