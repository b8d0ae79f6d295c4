//! wgpu upload of the occlusion buffers
//!
//! Each buffer becomes one `STORAGE | COPY_DST` buffer created with its
//! contents. Empty inputs leave the slot unset; the renderer treats a missing
//! occluder buffer as "no depth pre-pass this frame".

use super::buffer_sink::BufferSink;
use super::gpu_records::{GpuOccluder, GpuOctreeNode, GpuVoxel};
use crate::error::{OcclusionError, OcclusionResult};
use bytemuck::Pod;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device};

pub struct WgpuBufferSink {
    device: Arc<Device>,
    voxel_buffer: Option<Buffer>,
    octree_node_buffer: Option<Buffer>,
    best_occluder_buffer: Option<Buffer>,
}

impl WgpuBufferSink {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            voxel_buffer: None,
            octree_node_buffer: None,
            best_occluder_buffer: None,
        }
    }

    pub fn voxel_buffer(&self) -> Option<&Buffer> {
        self.voxel_buffer.as_ref()
    }

    pub fn octree_node_buffer(&self) -> Option<&Buffer> {
        self.octree_node_buffer.as_ref()
    }

    pub fn best_occluder_buffer(&self) -> Option<&Buffer> {
        self.best_occluder_buffer.as_ref()
    }

    fn create_storage_buffer<T: Pod>(
        &self,
        label: &str,
        records: &[T],
    ) -> OcclusionResult<Option<Buffer>> {
        if records.is_empty() {
            log::debug!("{} is empty, skipping upload", label);
            return Ok(None);
        }

        let bytes: &[u8] = bytemuck::cast_slice(records);
        let max_binding = self.device.limits().max_storage_buffer_binding_size as usize;
        if bytes.len() > max_binding {
            return Err(OcclusionError::Gpu {
                operation: format!("create {}", label),
                error: format!(
                    "{} bytes exceeds max storage binding size {}",
                    bytes.len(),
                    max_binding
                ),
            });
        }

        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            });
        log::debug!("Uploaded {} ({} records, {} bytes)", label, records.len(), bytes.len());
        Ok(Some(buffer))
    }
}

impl BufferSink for WgpuBufferSink {
    fn bind_voxel_buffer(&mut self, voxels: &[GpuVoxel]) -> OcclusionResult<()> {
        self.voxel_buffer = self.create_storage_buffer("Ordered voxel data buffer", voxels)?;
        Ok(())
    }

    fn bind_octree_node_buffer(&mut self, nodes: &[GpuOctreeNode]) -> OcclusionResult<()> {
        self.octree_node_buffer = self.create_storage_buffer("Octree node buffer", nodes)?;
        Ok(())
    }

    fn bind_best_occluder_buffer(&mut self, occluders: &[GpuOccluder]) -> OcclusionResult<()> {
        self.best_occluder_buffer =
            self.create_storage_buffer("Best occluder nodes buffer", occluders)?;
        Ok(())
    }
}
