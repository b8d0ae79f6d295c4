//! Data-Oriented Axis-Aligned Bounding Box
//!
//! Pure functions over a plain min/max box. Boxes handled by the octree are
//! always cubes; that is established by construction and only checked with
//! debug assertions.

use glam::{Vec3, Vec4};

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Vec3, max: Vec3) -> Aabb {
    Aabb { min, max }
}

/// Create a cube from its center and half side length
pub fn aabb_from_center_half_extent(center: Vec3, half_extent: f32) -> Aabb {
    Aabb {
        min: center - Vec3::splat(half_extent),
        max: center + Vec3::splat(half_extent),
    }
}

/// Get center point of AABB
pub fn aabb_center(aabb: &Aabb) -> Vec3 {
    (aabb.min + aabb.max) * 0.5
}

/// Get half extents of AABB
pub fn aabb_half_extent(aabb: &Aabb) -> Vec3 {
    (aabb.max - aabb.min) * 0.5
}

/// Full side length along x. Equal on all axes for cubes.
pub fn aabb_extent(aabb: &Aabb) -> f32 {
    aabb.max.x - aabb.min.x
}

/// Center in xyz, full side length in w
pub fn aabb_center_and_scale(aabb: &Aabb) -> Vec4 {
    aabb_center(aabb).extend(aabb_extent(aabb))
}

/// Test if two AABBs overlap. Closed intervals: touching faces intersect.
pub fn aabb_intersects(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.min.x <= aabb2.max.x && aabb1.max.x >= aabb2.min.x &&
    aabb1.min.y <= aabb2.max.y && aabb1.max.y >= aabb2.min.y &&
    aabb1.min.z <= aabb2.max.z && aabb1.max.z >= aabb2.min.z
}

/// Test if AABB contains a point. Closed intervals: points on a face are inside.
pub fn aabb_contains_point(aabb: &Aabb, point: Vec3) -> bool {
    point.x >= aabb.min.x && point.x <= aabb.max.x &&
    point.y >= aabb.min.y && point.y <= aabb.max.y &&
    point.z >= aabb.min.z && point.z <= aabb.max.z
}

/// The `octant`-th of the eight sub-cubes split at the center.
///
/// Bit 0 selects the upper x half, bit 1 the upper y half, bit 2 the upper z
/// half.
pub fn aabb_octant(aabb: &Aabb, octant: usize) -> Aabb {
    debug_assert!(octant < 8, "octant index {} out of range", octant);
    let center = aabb_center(aabb);
    let pick = |bit: usize, low: f32, mid: f32, high: f32| {
        if octant & bit != 0 {
            (mid, high)
        } else {
            (low, mid)
        }
    };
    let (min_x, max_x) = pick(1, aabb.min.x, center.x, aabb.max.x);
    let (min_y, max_y) = pick(2, aabb.min.y, center.y, aabb.max.y);
    let (min_z, max_z) = pick(4, aabb.min.z, center.z, aabb.max.z);
    Aabb {
        min: Vec3::new(min_x, min_y, min_z),
        max: Vec3::new(max_x, max_y, max_z),
    }
}
