//! Voxel sources
//!
//! A source reports the grid it was sampled on and the centers of its occupied
//! cells. Scene loading turns each center into a cube of half-scale
//! `root extent / (2 * grid_size)` and feeds it to the octree.

use crate::config::OcclusionConfig;
use crate::error::{OcclusionError, OcclusionResult};
use crate::geometry::{aabb_extent, create_aabb, Aabb};
use bit_vec::BitVec;
use glam::{UVec3, Vec3};

/// Grid resolution and the cubic root region it spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    pub grid_size: u32,
    pub root_bounds: Aabb,
}

/// Anything that can be loaded as a scene
pub trait VoxelSource {
    fn dimensions(&self, config: &OcclusionConfig) -> OcclusionResult<GridDimensions>;
    fn voxel_centers(&self) -> Vec<Vec3>;
}

/// Check that dimensions describe a usable non-empty cube
pub fn validate_dimensions(dimensions: &GridDimensions) -> OcclusionResult<()> {
    if dimensions.grid_size == 0 {
        return Err(OcclusionError::InvalidGrid("grid size must be >= 1".to_string()));
    }
    let extent = aabb_extent(&dimensions.root_bounds);
    if !extent.is_finite() || extent <= 0.0 {
        return Err(OcclusionError::InvalidGrid(format!(
            "root bounds {:?} have no volume",
            dimensions.root_bounds
        )));
    }
    Ok(())
}

/// Cubic occupancy grid, one bit per cell, x fastest then y then z
#[derive(Debug, Clone)]
pub struct DenseVoxelGrid {
    size: u32,
    origin: Vec3,
    cell_size: f32,
    occupancy: BitVec,
}

impl DenseVoxelGrid {
    /// Empty grid of `size^3` cells
    pub fn new(size: u32, origin: Vec3, cell_size: f32) -> OcclusionResult<Self> {
        let cells = checked_cell_count(size, cell_size)?;
        Ok(Self {
            size,
            origin,
            cell_size,
            occupancy: BitVec::from_elem(cells, false),
        })
    }

    /// Wrap an existing occupancy mask, e.g. one decoded from a voxel file
    pub fn from_occupancy(
        size: u32,
        origin: Vec3,
        cell_size: f32,
        occupancy: BitVec,
    ) -> OcclusionResult<Self> {
        let cells = checked_cell_count(size, cell_size)?;
        if occupancy.len() != cells {
            return Err(OcclusionError::InvalidGrid(format!(
                "occupancy has {} bits, a {}^3 grid needs {}",
                occupancy.len(),
                size,
                cells
            )));
        }
        Ok(Self {
            size,
            origin,
            cell_size,
            occupancy,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set(&mut self, cell: UVec3, occupied: bool) -> OcclusionResult<()> {
        let index = self.cell_index(cell)?;
        self.occupancy.set(index, occupied);
        Ok(())
    }

    pub fn is_occupied(&self, cell: UVec3) -> OcclusionResult<bool> {
        let index = self.cell_index(cell)?;
        Ok(self.occupancy.get(index).unwrap_or(false))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupancy.iter().filter(|bit| *bit).count()
    }

    fn cell_index(&self, cell: UVec3) -> OcclusionResult<usize> {
        if cell.max_element() >= self.size {
            return Err(OcclusionError::InvalidGrid(format!(
                "cell {:?} outside {}^3 grid",
                cell, self.size
            )));
        }
        let size = self.size as usize;
        Ok(cell.x as usize + size * (cell.y as usize + size * cell.z as usize))
    }
}

fn checked_cell_count(size: u32, cell_size: f32) -> OcclusionResult<usize> {
    if size == 0 {
        return Err(OcclusionError::InvalidGrid("grid size must be >= 1".to_string()));
    }
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(OcclusionError::InvalidGrid(format!(
            "cell size {} must be finite and > 0",
            cell_size
        )));
    }
    let size = size as usize;
    size.checked_mul(size)
        .and_then(|square| square.checked_mul(size))
        .ok_or_else(|| OcclusionError::InvalidGrid(format!("{}^3 cells overflow", size)))
}

impl VoxelSource for DenseVoxelGrid {
    fn dimensions(&self, _config: &OcclusionConfig) -> OcclusionResult<GridDimensions> {
        let extent = self.size as f32 * self.cell_size;
        Ok(GridDimensions {
            grid_size: self.size,
            root_bounds: create_aabb(self.origin, self.origin + Vec3::splat(extent)),
        })
    }

    fn voxel_centers(&self) -> Vec<Vec3> {
        let size = self.size as usize;
        self.occupancy
            .iter()
            .enumerate()
            .filter(|(_, occupied)| *occupied)
            .map(|(index, _)| {
                let cell = Vec3::new(
                    (index % size) as f32,
                    ((index / size) % size) as f32,
                    (index / (size * size)) as f32,
                );
                self.origin + (cell + 0.5) * self.cell_size
            })
            .collect()
    }
}

/// Loose voxel centers, such as the output of a mesh voxelizer
#[derive(Debug, Clone)]
pub struct PointCloud {
    centers: Vec<Vec3>,
    voxel_size: f32,
}

impl PointCloud {
    pub fn new(centers: Vec<Vec3>, voxel_size: f32) -> OcclusionResult<Self> {
        if !voxel_size.is_finite() || voxel_size <= 0.0 {
            return Err(OcclusionError::InvalidGrid(format!(
                "voxel size {} must be finite and > 0",
                voxel_size
            )));
        }
        if let Some(bad) = centers.iter().find(|c| !c.is_finite()) {
            return Err(OcclusionError::InvalidGrid(format!(
                "non-finite voxel center {:?}",
                bad
            )));
        }
        Ok(Self {
            centers,
            voxel_size,
        })
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

impl VoxelSource for PointCloud {
    /// Tight bounds of the centers, padded on every side, then grown along
    /// the shorter axes into a cube a whole number of voxels wide.
    fn dimensions(&self, config: &OcclusionConfig) -> OcclusionResult<GridDimensions> {
        let (min, max) = self.centers.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), c| (min.min(*c), max.max(*c)),
        );
        let (min, max) = if self.centers.is_empty() {
            (Vec3::ZERO, Vec3::ZERO)
        } else {
            (min, max)
        };

        let padding = Vec3::splat(config.root_padding_voxels * self.voxel_size);
        let min = min - padding;
        let max = max + padding;

        let cells = ((max - min).max_element() / self.voxel_size).ceil().max(1.0);
        if cells > u32::MAX as f32 {
            return Err(OcclusionError::InvalidGrid(format!(
                "point cloud spans {} voxels per axis",
                cells
            )));
        }
        let extent = cells * self.voxel_size;

        Ok(GridDimensions {
            grid_size: cells as u32,
            root_bounds: create_aabb(min, min + Vec3::splat(extent)),
        })
    }

    fn voxel_centers(&self) -> Vec<Vec3> {
        self.centers.clone()
    }
}
