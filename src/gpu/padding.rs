//! Group-size padding for structured buffers
//!
//! Dispatch and draw counts are taken straight from buffer lengths, so every
//! buffer is grown to a whole number of execution groups with zeroed records.
//! A zeroed node or occluder has a zero count and a zero-sized box, which the
//! shaders skip.

use bytemuck::Zeroable;

/// Smallest multiple of `group_size` that is >= `len`
pub fn padded_len(len: usize, group_size: usize) -> usize {
    debug_assert!(group_size > 0, "group size must be non-zero");
    len.div_ceil(group_size) * group_size
}

/// Pad `buffer` with zeroed records up to the next multiple of `group_size`.
/// Returns the number of records appended. An empty buffer stays empty.
pub fn pad_to_group_size<T: Zeroable + Copy>(buffer: &mut Vec<T>, group_size: usize) -> usize {
    let target = padded_len(buffer.len(), group_size);
    let added = target - buffer.len();
    buffer.resize(target, T::zeroed());
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::GpuOctreeNode;
    use glam::Vec4;

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0, 64), 0);
        assert_eq!(padded_len(1, 64), 64);
        assert_eq!(padded_len(64, 64), 64);
        assert_eq!(padded_len(65, 64), 128);
        assert_eq!(padded_len(5, 1), 5);
    }

    #[test]
    fn test_pad_appends_inert_records() {
        let mut nodes = vec![GpuOctreeNode::new(Vec4::ONE, 0, 3); 3];
        let added = pad_to_group_size(&mut nodes, 4);

        assert_eq!(added, 1);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[3].voxel_count, 0);
        assert_eq!(nodes[2].voxel_count, 3);
    }

    #[test]
    fn test_exact_multiple_unchanged() {
        let mut nodes = vec![GpuOctreeNode::new(Vec4::ONE, 0, 1); 8];
        assert_eq!(pad_to_group_size(&mut nodes, 8), 0);
        assert_eq!(nodes.len(), 8);

        let mut empty: Vec<GpuOctreeNode> = Vec::new();
        assert_eq!(pad_to_group_size(&mut empty, 8), 0);
        assert!(empty.is_empty());
    }
}
