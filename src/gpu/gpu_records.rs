use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use static_assertions::const_assert_eq;

/// Entry of the ordered voxel buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVoxel {
    /// [x, y, z, half_scale]
    pub base_pos_and_scale: [f32; 4],
}

/// Octree node as seen by the culling shaders
///
/// `[voxel_start, voxel_start + voxel_count)` indexes the ordered voxel
/// buffer. Padding entries have a zero count.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuOctreeNode {
    /// [x, y, z, side_length] of the node's box
    pub base_pos_and_scale: [f32; 4],
    pub voxel_start: u32,
    pub voxel_count: u32,
    _padding: [u32; 2],
}

/// Coarse depth pre-pass proxy: one fully packed octree region
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuOccluder {
    /// [x, y, z, side_length] of the occluding box
    pub base_pos_and_scale: [f32; 4],
    /// Number of real (non-padding) occluders in the buffer
    pub best_occluder_count: u32,
    _padding: [u32; 3],
}

// Structured buffers need 16-byte element strides.
const_assert_eq!(std::mem::size_of::<GpuVoxel>() % 16, 0);
const_assert_eq!(std::mem::size_of::<GpuOctreeNode>() % 16, 0);
const_assert_eq!(std::mem::size_of::<GpuOccluder>() % 16, 0);

impl GpuVoxel {
    pub fn new(base_pos_and_scale: Vec4) -> Self {
        Self {
            base_pos_and_scale: base_pos_and_scale.to_array(),
        }
    }
}

impl GpuOctreeNode {
    pub fn new(base_pos_and_scale: Vec4, voxel_start: u32, voxel_count: u32) -> Self {
        Self {
            base_pos_and_scale: base_pos_and_scale.to_array(),
            voxel_start,
            voxel_count,
            _padding: [0; 2],
        }
    }

    /// Index range into the ordered voxel buffer
    pub fn voxel_range(&self) -> std::ops::Range<usize> {
        let start = self.voxel_start as usize;
        start..start + self.voxel_count as usize
    }
}

impl GpuOccluder {
    pub fn new(base_pos_and_scale: Vec4) -> Self {
        Self {
            base_pos_and_scale: base_pos_and_scale.to_array(),
            best_occluder_count: 0,
            _padding: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_strides() {
        assert_eq!(std::mem::size_of::<GpuVoxel>(), 16);
        assert_eq!(std::mem::size_of::<GpuOctreeNode>(), 32);
        assert_eq!(std::mem::size_of::<GpuOccluder>(), 32);
    }

    #[test]
    fn test_node_byte_layout() {
        let node = GpuOctreeNode::new(Vec4::new(1.0, 2.0, 3.0, 4.0), 7, 9);
        let words: &[u32] = bytemuck::cast_slice(std::slice::from_ref(&node));
        assert_eq!(words[0], 1.0f32.to_bits());
        assert_eq!(words[3], 4.0f32.to_bits());
        assert_eq!(words[4], 7);
        assert_eq!(words[5], 9);
        assert_eq!(&words[6..], &[0, 0]);
        assert_eq!(node.voxel_range(), 7..16);
    }

    #[test]
    fn test_zeroed_node_is_inert() {
        let node = GpuOctreeNode::zeroed();
        assert_eq!(node.voxel_count, 0);
        assert!(node.voxel_range().is_empty());
    }
}
